mod io;
mod parser;

pub use io::IoError;
pub use parser::ParserError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Parser(#[from] ParserError),
}

pub type Result<T> = std::result::Result<T, Error>;
