/// Opaque handle to one rendered layer on the map surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerId(pub u64);

/// Monotonic layer id allocator. One per controller; ids are never reused,
/// so a stale remove can never hit a newer layer.
#[derive(Debug, Default)]
pub struct LayerIdAlloc {
    next: u64,
}

impl LayerIdAlloc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> LayerId {
        let id = LayerId(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::LayerIdAlloc;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut alloc = LayerIdAlloc::new();
        let a = alloc.next();
        let b = alloc.next();
        assert!(a < b);
        assert_ne!(a, b);
    }
}
