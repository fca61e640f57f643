use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Env,
        value::core::{ArrayRef, Value},
    },
};

/// A write capability produced while an assignment resolves its left side.
///
/// Lvalues exist only between the resolution of an assignment target and the
/// write that consumes it; they never reach user code. A handle addresses
/// either a named binding in a specific scope or a single slot of a shared
/// array.
#[derive(Debug, Clone)]
pub enum LValue {
    /// A named binding in the scope that declares (or will declare) it.
    Binding {
        /// The scope the write lands in.
        env:  Env,
        /// The bound name.
        name: String,
    },
    /// One slot of an array, addressed by a raw index.
    ///
    /// The index is kept signed and validated at write time so a negative
    /// index reports the same range error an out-of-bounds read does.
    Slot {
        /// The addressed array.
        array: ArrayRef,
        /// The slot index as evaluated.
        index: i64,
    },
}

impl LValue {
    /// Writes a value through the handle.
    ///
    /// # Errors
    /// Returns [`RuntimeError::IndexOutOfRange`] when a slot index is
    /// negative or past the end of the array.
    pub fn set(&self, value: Value) -> Result<(), RuntimeError> {
        match self {
            Self::Binding { env, name } => {
                env.set(name, value);
                Ok(())
            },
            Self::Slot { array, index } => {
                let mut elements = array.borrow_mut();
                let slot = usize::try_from(*index)
                    .ok()
                    .filter(|index| *index < elements.len())
                    .ok_or(RuntimeError::IndexOutOfRange)?;

                elements[slot] = value;
                Ok(())
            },
        }
    }
}
