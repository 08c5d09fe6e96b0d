use std::fmt;
use std::str::FromStr;

use anyhow::bail;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Choice {
    Push,
    Pop,
    Peek,
    IsEmpty,
    Size,
    Display,
    Reverse,
    Exit,
}

impl FromStr for Choice {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        #[rustfmt::skip]
        let choice = match s {
            "1" => Choice::Push,
            "2" => Choice::Pop,
            "3" => Choice::Peek,
            "4" => Choice::IsEmpty,
            "5" => Choice::Size,
            "6" => Choice::Display,
            "7" => Choice::Reverse,
            "0" => Choice::Exit,
            _   => bail!("Unknown menu choice: {:?}", s),
        };

        Ok(choice)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[rustfmt::skip]
        let name = match self {
            Choice::Push    => "push",
            Choice::Pop     => "pop",
            Choice::Peek    => "peek",
            Choice::IsEmpty => "is_empty",
            Choice::Size    => "size",
            Choice::Display => "display",
            Choice::Reverse => "reverse",
            Choice::Exit    => "exit",
        };

        write!(f, "{}", name)
    }
}
