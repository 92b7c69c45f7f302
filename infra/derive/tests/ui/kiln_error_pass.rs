use kiln_derive::kiln_error;
use std::borrow::Cow;

#[kiln_error]
pub enum UnitError {
    #[error("I/O failure{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Malformed unit{}: {path}", format_context(.context))]
    Malformed { path: String, context: Option<std::borrow::Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read(path: &str) -> Result<String, UnitError> {
    std::fs::read_to_string(path).context(format!("reading {path}"))
}

fn main() {
    let err: UnitError = "boom".into();
    assert_eq!(err.to_string(), "Internal error: boom");

    let err = Err::<(), _>(UnitError::from(String::from("late"))).context("stage").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (stage): late");

    let _ = read("/definitely/not/here");
}
