/// The `Counter` struct hands out increasing ids, starting at 1.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Deref,
    derive_more::DerefMut,
)]
pub struct Counter(u64);

impl Counter {
    pub fn next_id(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// The next id, as an accessibility node id.
    pub fn node_id(&mut self) -> accesskit::NodeId {
        accesskit::NodeId(self.next_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one() {
        let mut counter = Counter::default();
        assert_eq!(counter.next_id(), 1);
        assert_eq!(counter.node_id(), accesskit::NodeId(2));
        assert_eq!(*counter, 2);
    }
}
