use super::AsSingleTargets;
use crate::error::{Error, Result};
use ndarray::{ArrayBase, ArrayView1, Axis, Data, Ix1, Ix2};

/// A one-dimensional NdArray can act as targets
impl<L, S: Data<Elem = L>> AsSingleTargets for ArrayBase<S, Ix1> {
    type Elem = L;

    fn as_single_targets(&self) -> Result<ArrayView1<L>> {
        Ok(self.view())
    }
}

/// A column matrix can act as targets, wider matrices are rejected
impl<L, S: Data<Elem = L>> AsSingleTargets for ArrayBase<S, Ix2> {
    type Elem = L;

    fn as_single_targets(&self) -> Result<ArrayView1<L>> {
        if self.len_of(Axis(1)) != 1 {
            return Err(Error::MultipleTargets);
        }

        Ok(self.index_axis(Axis(1), 0))
    }
}
