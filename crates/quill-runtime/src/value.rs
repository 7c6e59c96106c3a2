//! Runtime value representation
//!
//! Shared value representation for the compiler's constant pool and the VM.
//! - Integers, Bools, Null: immediate values
//! - Strings: heap-allocated, reference-counted, immutable
//! - Arrays and Hashes: heap-allocated, reference-counted, immutable after
//!   construction (operations produce new values)
//! - Compiled functions: reference-counted instruction buffers

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

use crate::bytecode::DecodeError;

/// Runtime value type
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Integer value (64-bit signed)
    Integer(i64),
    /// Boolean value
    Boolean(bool),
    /// String value (reference-counted, immutable)
    String(Rc<String>),
    /// Array value (ordered, immutable after construction)
    Array(Rc<Vec<Value>>),
    /// Hash value keyed by structural fingerprint; each slot keeps the
    /// original key object alongside the value
    Hash(Rc<HashMap<HashKey, HashPair>>),
    /// Function compiled to its own instruction buffer
    CompiledFunction(Rc<CompiledFunction>),
    /// Null value
    Null,
}

/// Key/value slot stored in a hash
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    pub key: Value,
    pub value: Value,
}

/// Structural fingerprint of a hashable value
///
/// Two values of equal kind and equal payload produce equal fingerprints.
/// Only integers, booleans, and strings are hashable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    String(String),
}

/// A function lowered to bytecode
///
/// The instruction buffer is immutable after compilation; the VM reads it
/// through the active frame. `num_locals` counts parameters plus `let`
/// bindings and sizes the frame's local-slot reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFunction {
    pub instructions: Vec<u8>,
    pub num_locals: usize,
}

impl Value {
    /// Create a new string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Rc::new(s.into()))
    }

    /// Create a new array value
    pub fn array(values: Vec<Value>) -> Self {
        Value::Array(Rc::new(values))
    }

    /// Get the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Boolean(_) => "boolean",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Hash(_) => "hash",
            Value::CompiledFunction(_) => "function",
            Value::Null => "null",
        }
    }

    /// Check if this value is truthy
    ///
    /// `false` and `null` are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Boolean(b) => *b,
            Value::Null => false,
            _ => true,
        }
    }

    /// Compute the structural fingerprint used for hash storage
    pub fn hash_key(&self) -> Result<HashKey, RuntimeError> {
        match self {
            Value::Integer(n) => Ok(HashKey::Integer(*n)),
            Value::Boolean(b) => Ok(HashKey::Boolean(*b)),
            Value::String(s) => Ok(HashKey::String(s.as_ref().clone())),
            other => Err(RuntimeError::UnusableHashKey(other.type_name())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::String(s) => f.write_str(s),
            Value::Array(elements) => {
                let rendered: Vec<String> = elements.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
            Value::Hash(pairs) => {
                let rendered: Vec<String> = pairs
                    .values()
                    .map(|pair| format!("{}: {}", pair.key, pair.value))
                    .collect();
                write!(f, "{{{}}}", rendered.join(", "))
            }
            Value::CompiledFunction(_) => f.write_str("<compiled fn>"),
            Value::Null => f.write_str("null"),
        }
    }
}

/// Runtime error type
///
/// Every failure the VM can produce; errors propagate to the top-level
/// `run()` caller and the VM is not reusable afterward.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeError {
    /// Binary operator applied to an unsupported type pairing
    #[error("unsupported types for binary operation: {left} {right}")]
    UnsupportedBinaryTypes {
        left: &'static str,
        right: &'static str,
    },
    /// Unary minus on a non-integer
    #[error("unsupported type for negation: {0}")]
    UnsupportedNegation(&'static str),
    /// Comparison opcode with no meaning for the operand types
    #[error("unknown operator: {opcode} ({left} {right})")]
    UnknownOperator {
        opcode: u8,
        left: &'static str,
        right: &'static str,
    },
    /// Non-concatenation operator applied to two strings
    #[error("unknown string operator: {0}")]
    UnknownStringOperator(u8),
    /// Hash construction with an unhashable key
    #[error("unusable as hash key: {0}")]
    UnusableHashKey(&'static str),
    /// Array subscript that is not an integer
    #[error("unknown index type for array: {0}")]
    UnknownArrayIndexType(&'static str),
    /// Hash subscript that is not hashable
    #[error("unknown index type for hash: {0}")]
    UnknownHashIndexType(&'static str),
    /// Subscript applied to a non-collection
    #[error("index operator not supported: {0}")]
    IndexNotSupported(&'static str),
    /// Call of a value that is not a compiled function
    #[error("wrong type for compiled function: {0}")]
    NotCallable(&'static str),
    /// Integer division with a zero divisor
    #[error("division by zero")]
    DivisionByZero,
    /// Operand stack or frame stack capacity exhausted
    #[error("stack overflow")]
    StackOverflow,
    /// Pop from an empty operand stack
    #[error("stack underflow")]
    StackUnderflow,
    /// Return executed with no suspended caller frame
    #[error("frame stack underflow")]
    FrameUnderflow,
    /// Undefined opcode byte in the instruction stream
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Integer(42).type_name(), "integer");
        assert_eq!(Value::Boolean(true).type_name(), "boolean");
        assert_eq!(Value::string("hi").type_name(), "string");
        assert_eq!(Value::array(vec![]).type_name(), "array");
        assert_eq!(Value::Hash(Rc::new(HashMap::new())).type_name(), "hash");
        assert_eq!(Value::Null.type_name(), "null");
    }

    #[test]
    fn test_is_truthy() {
        assert!(Value::Boolean(true).is_truthy());
        assert!(!Value::Boolean(false).is_truthy());
        assert!(!Value::Null.is_truthy());
        assert!(Value::Integer(0).is_truthy());
        assert!(Value::string("").is_truthy());
    }

    #[test]
    fn test_string_hash_keys_are_structural() {
        let a = Value::string("name");
        let b = Value::string("name");
        let c = Value::string("other");

        assert_eq!(a.hash_key().unwrap(), b.hash_key().unwrap());
        assert_ne!(a.hash_key().unwrap(), c.hash_key().unwrap());
    }

    #[test]
    fn test_hash_keys_distinguish_kinds() {
        // Integer(1) and Boolean(true) must not collide structurally
        assert_ne!(
            Value::Integer(1).hash_key().unwrap(),
            Value::Boolean(true).hash_key().unwrap()
        );
    }

    #[test]
    fn test_unhashable_values() {
        let err = Value::array(vec![]).hash_key().unwrap_err();
        assert_eq!(err.to_string(), "unusable as hash key: array");
        assert!(Value::Null.hash_key().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Integer(42).to_string(), "42");
        assert_eq!(Value::string("hello").to_string(), "hello");
        assert_eq!(
            Value::array(vec![Value::Integer(1), Value::Integer(2)]).to_string(),
            "[1, 2]"
        );
        assert_eq!(Value::Null.to_string(), "null");
    }
}
