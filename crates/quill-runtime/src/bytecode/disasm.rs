//! Bytecode disassembler
//!
//! Converts an instruction stream back to a stable human-readable listing,
//! one line per instruction: byte offset, opcode name, decoded operands.

use super::{read_operands, Opcode};

/// Disassemble an instruction stream
///
/// # Format
/// ```text
/// 0000 OpConstant 1
/// 0003 OpConstant 2
/// 0006 OpAdd
/// ```
///
/// Undefined opcode bytes produce an `ERROR:` line and decoding continues at
/// the next byte; all other call sites treat decode failures as fatal.
pub fn disassemble(ins: &[u8]) -> String {
    let mut lines = Vec::new();
    let mut offset = 0;

    while offset < ins.len() {
        let op = match Opcode::lookup(ins[offset]) {
            Ok(op) => op,
            Err(err) => {
                lines.push(format!("{:04} ERROR: {}", offset, err));
                offset += 1;
                continue;
            }
        };

        let def = op.definition();
        let width: usize = def.operand_widths.iter().sum();
        if offset + 1 + width > ins.len() {
            lines.push(format!("{:04} ERROR: truncated operands for {}", offset, def.name));
            break;
        }

        let (operands, read) = read_operands(&def, &ins[offset + 1..]);
        if operands.is_empty() {
            lines.push(format!("{:04} {}", offset, def.name));
        } else {
            let rendered: Vec<String> = operands.iter().map(|o| o.to_string()).collect();
            lines.push(format!("{:04} {} {}", offset, def.name, rendered.join(" ")));
        }

        offset += 1 + read;
    }

    lines.join("\n")
}
