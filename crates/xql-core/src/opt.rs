//! Option-fold construction.
//!
//! Catalog constructors take their required fields positionally and a list
//! of [`Opt`] values for everything else. Each option mutates the node under
//! construction. Options are applied in order, so when two options write the
//! same field the last one wins.

use std::fmt;

/// A deferred modification of a `T` under construction.
pub struct Opt<T>(Box<dyn FnOnce(&mut T)>);

impl<T> Opt<T> {
    /// Creates an option from a closure.
    #[must_use]
    pub fn new(f: impl FnOnce(&mut T) + 'static) -> Self {
        Self(Box::new(f))
    }

    /// Applies this option to `target`.
    pub fn apply(self, target: &mut T) {
        (self.0)(target);
    }
}

impl<T> fmt::Debug for Opt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Opt")
    }
}

/// Folds `opts` over `init` in order.
#[must_use]
pub fn build<T>(init: T, opts: impl IntoIterator<Item = Opt<T>>) -> T {
    opts.into_iter().fold(init, |mut target, opt| {
        opt.apply(&mut target);
        target
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Target {
        name: String,
        size: Option<u32>,
        tags: Vec<&'static str>,
    }

    fn size(n: u32) -> Opt<Target> {
        Opt::new(move |t: &mut Target| t.size = Some(n))
    }

    fn tag(s: &'static str) -> Opt<Target> {
        Opt::new(move |t: &mut Target| t.tags.push(s))
    }

    #[test]
    fn test_options_apply_in_order() {
        let t = build(
            Target {
                name: "t".into(),
                ..Target::default()
            },
            [tag("a"), size(1), tag("b")],
        );
        assert_eq!(t.name, "t");
        assert_eq!(t.size, Some(1));
        assert_eq!(t.tags, vec!["a", "b"]);
    }

    #[test]
    fn test_last_write_wins() {
        let t = build(Target::default(), [size(1), size(2)]);
        assert_eq!(t.size, Some(2));
    }

    #[test]
    fn test_no_options() {
        let t = build(Target::default(), []);
        assert_eq!(t, Target::default());
    }
}
