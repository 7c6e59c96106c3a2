//! Call frame implementation for function calls

use std::rc::Rc;

use crate::value::CompiledFunction;

/// Activation record of a function call
///
/// Tracks the function's instruction buffer, the instruction pointer, and
/// where the frame's local slots begin on the operand stack. The top-level
/// program also runs in a frame with `base_pointer = 0`.
///
/// ## Stack layout
///
/// ```text
/// [ .. caller values .. ][callee][arg0][arg1][local2][local3]
///                                 ^
///                                 base_pointer
/// ```
///
/// Arguments occupy the first slots of the locals region, so `GetLocal 0`
/// in a two-argument function reads the first argument.
#[derive(Debug, Clone)]
pub struct Frame {
    func: Rc<CompiledFunction>,
    /// Instruction pointer; starts at -1 and is pre-incremented by the
    /// fetch loop
    pub ip: i64,
    /// Stack index where this frame's local slots begin
    pub base_pointer: usize,
}

impl Frame {
    pub fn new(func: Rc<CompiledFunction>, base_pointer: usize) -> Self {
        Self {
            func,
            ip: -1,
            base_pointer,
        }
    }

    /// The instruction buffer this frame executes
    pub fn instructions(&self) -> &[u8] {
        &self.func.instructions
    }

    /// Local slots reserved for this frame (parameters included)
    pub fn num_locals(&self) -> usize {
        self.func.num_locals
    }
}
