/// A trait for reacting to the edit script of an alignment.
///
/// The steps are reported in increasing index order, one element at a time.
/// Each method receives the position in the old and in the new sequence the
/// step happens at.
pub trait AlignHook: Sized {
    /// The error produced from the hook methods.
    type Error;

    /// Called when `old[old_index]` and `new[new_index]` are equal.
    fn equal(&mut self, old_index: usize, new_index: usize) -> Result<(), Self::Error> {
        let _ = old_index;
        let _ = new_index;
        Ok(())
    }

    /// Called when `old[old_index]` is replaced by `new[new_index]`.
    fn replace(&mut self, old_index: usize, new_index: usize) -> Result<(), Self::Error> {
        let _ = old_index;
        let _ = new_index;
        Ok(())
    }

    /// Called when `new[new_index]` is inserted in front of `old[old_index]`.
    fn insert(&mut self, old_index: usize, new_index: usize) -> Result<(), Self::Error> {
        let _ = old_index;
        let _ = new_index;
        Ok(())
    }

    /// Called when `old[old_index]` is deleted.  `new_index` is the position
    /// in the new sequence where the deleted element would have been.
    fn delete(&mut self, old_index: usize, new_index: usize) -> Result<(), Self::Error> {
        let _ = old_index;
        let _ = new_index;
        Ok(())
    }

    /// Always called at the end of the walk.
    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<'a, D: AlignHook + 'a> AlignHook for &'a mut D {
    type Error = D::Error;

    fn equal(&mut self, old_index: usize, new_index: usize) -> Result<(), Self::Error> {
        (*self).equal(old_index, new_index)
    }

    fn replace(&mut self, old_index: usize, new_index: usize) -> Result<(), Self::Error> {
        (*self).replace(old_index, new_index)
    }

    fn insert(&mut self, old_index: usize, new_index: usize) -> Result<(), Self::Error> {
        (*self).insert(old_index, new_index)
    }

    fn delete(&mut self, old_index: usize, new_index: usize) -> Result<(), Self::Error> {
        (*self).delete(old_index, new_index)
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        (*self).finish()
    }
}

#[test]
fn test_forwarding() {
    use crate::algorithms::{backpointer, Capture, Policy};

    let mut capture = Capture::new();
    let mut hook = &mut capture;
    let rv = backpointer::align_slices(&mut hook, Policy::LowestCost, &[1, 2], &[2]);
    assert_eq!(rv, Ok((1, 1)));
    assert_eq!(
        capture
            .ops()
            .iter()
            .map(|op| op.to_string())
            .collect::<Vec<_>>(),
        vec!["delete(0,1,0,0)", "equal(1,2,0,1)"]
    );
}
