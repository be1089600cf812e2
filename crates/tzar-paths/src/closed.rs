use crate::bitset::TileBitSet;
use crate::tile::TileRef;

/// Tiles whose shortest cost is final.
#[derive(Debug, Clone)]
pub struct ClosedSet {
    bits: TileBitSet,
    len: usize,
}

impl ClosedSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: TileBitSet::new(capacity),
            len: 0,
        }
    }

    #[inline]
    pub fn insert(&mut self, tile: TileRef) {
        self.insert_index(tile.index());
    }

    #[inline]
    pub fn insert_index(&mut self, index: usize) {
        if !self.bits.test(index) {
            self.bits.set(index);
            self.len += 1;
        }
    }

    #[inline]
    pub fn find(&self, tile: TileRef) -> bool {
        self.bits.test(tile.index())
    }

    #[inline]
    pub fn find_index(&self, index: usize) -> bool {
        self.bits.test(index)
    }

    /// Number of finalized tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.bits.capacity()
    }

    /// Forget every tile, keeping the storage.
    pub fn cleanup(&mut self) {
        self.bits.clear_all();
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_find() {
        let mut c = ClosedSet::new(16);
        assert!(c.is_empty());
        c.insert(TileRef::new(3));
        c.insert_index(9);
        c.insert(TileRef::new(3));
        assert_eq!(c.len(), 2);
        assert!(c.find(TileRef::new(3)));
        assert!(c.find_index(9));
        assert!(!c.find(TileRef::new(4)));
    }

    #[test]
    fn cleanup_on_empty_set_is_a_no_op() {
        let mut c = ClosedSet::new(16);
        c.cleanup();
        assert_eq!(c.len(), 0);
        assert!((0..16).all(|i| !c.find_index(i)));

        c.insert_index(15);
        c.cleanup();
        c.cleanup();
        assert!(c.is_empty());
        assert!(!c.find_index(15));
        assert_eq!(c.capacity(), 16);
    }
}
