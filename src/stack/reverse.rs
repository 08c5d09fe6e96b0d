use super::Stack;

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

/// Reverses `s` by pushing every char onto a [`Stack`] and popping them back off.
pub fn reverse(s: &str) -> String {
    let mut stack = Stack::new();

    for c in s.chars() {
        stack.push(c);
    }

    trace!("reverse: pushed {} chars", stack.size());

    let mut rev = String::with_capacity(s.len());
    while let Ok(c) = stack.pop() {
        rev.push(c);
    }

    rev
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverses_hello() {
        assert_eq!("olleh", reverse("hello"));
    }

    #[test]
    fn empty_string() {
        assert_eq!("", reverse(""));
    }

    #[test]
    fn double_reverse_is_identity() {
        for s in ["", "a", "ab", "racecar", "stack ADT", "héllo wörld", "🦀x🦀y"] {
            assert_eq!(s, reverse(&reverse(s)));
        }
    }

    #[test]
    fn keeps_length_and_chars() {
        let s = "abracadabra";
        let r = reverse(s);

        assert_eq!(s.chars().count(), r.chars().count());

        let mut a: Vec<char> = s.chars().collect();
        let mut b: Vec<char> = r.chars().collect();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }

    #[test]
    fn multibyte_chars_stay_whole() {
        assert_eq!("ßa🦀", reverse("🦀aß"));
    }
}
