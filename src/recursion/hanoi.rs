use std::fmt;
use std::str::FromStr;

use anyhow::bail;
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

/// Every move is kept in memory, so the disk count is capped.
pub const MAX_DISKS: u32 = 20;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Rod {
    A,
    B,
    C,
}

impl fmt::Display for Rod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[rustfmt::skip]
        let name = match self {
            Rod::A => "A",
            Rod::B => "B",
            Rod::C => "C",
        };

        write!(f, "{}", name)
    }
}

impl FromStr for Rod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim() {
            "A" | "a" => Ok(Rod::A),
            "B" | "b" => Ok(Rod::B),
            "C" | "c" => Ok(Rod::C),
            other => bail!("Unknown rod {:?}, expected one of A, B or C", other),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Move {
    pub disk: u32,
    pub from: Rod,
    pub to: Rod,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move disk {} from {} to {}", self.disk, self.from, self.to)
    }
}

/// Moves `n` disks from `source` to `destination`, returning each step in order.
///
/// The smallest disk is disk 1. The solution always has `2^n - 1` moves.
pub fn solve(n: u32, source: Rod, destination: Rod, auxiliary: Rod) -> Vec<Move> {
    let mut moves = Vec::new();
    solve_into(n, source, destination, auxiliary, &mut moves);

    moves
}

fn solve_into(n: u32, source: Rod, destination: Rod, auxiliary: Rod, moves: &mut Vec<Move>) {
    if n == 0 {
        return;
    }

    trace!("hanoi({}, {}, {}, {})", n, source, destination, auxiliary);

    // park the n - 1 smaller disks on the spare rod, move disk n, then stack them back on top
    solve_into(n - 1, source, auxiliary, destination, moves);
    moves.push(Move {
        disk: n,
        from: source,
        to: destination,
    });
    solve_into(n - 1, auxiliary, destination, source, moves);
}
