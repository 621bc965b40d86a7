use crate::BVH_STACK_SIZE;

/// Fixed-size stack for nodes yet-to-be-visited when traversing the BVH.
///
/// Each traversal allocates its own stack, so no traversal state is shared
/// between pixels. Pushing more than [`BVH_STACK_SIZE`] entries means that the
/// supplied tree is deeper than supported and panics.
pub struct BvhStack<T> {
    items: [T; BVH_STACK_SIZE],
    len: usize,
}

impl<T> BvhStack<T>
where
    T: Copy + Default,
{
    pub fn new() -> Self {
        Self {
            items: [T::default(); BVH_STACK_SIZE],
            len: 0,
        }
    }

    pub fn push(&mut self, item: T) {
        assert!(
            self.len < BVH_STACK_SIZE,
            "BVH traversal exceeded {BVH_STACK_SIZE} stack entries; \
             the tree is deeper than supported"
        );

        self.items[self.len] = item;
        self.len += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;

        Some(self.items[self.len])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Default for BvhStack<T>
where
    T: Copy + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifo() {
        let mut target = BvhStack::<(u32, f32)>::new();

        assert_eq!(None, target.pop());

        target.push((1, 10.0));
        target.push((2, 5.0));

        assert_eq!(2, target.len());
        assert_eq!(Some((2, 5.0)), target.pop());
        assert_eq!(Some((1, 10.0)), target.pop());
        assert!(target.is_empty());
    }

    #[test]
    #[should_panic(expected = "stack entries")]
    fn overflow() {
        let mut target = BvhStack::<u32>::new();

        for idx in 0..=BVH_STACK_SIZE {
            target.push(idx as u32);
        }
    }
}
