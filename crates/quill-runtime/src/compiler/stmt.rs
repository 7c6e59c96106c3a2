//! Statement lowering

use crate::ast::{BlockStatement, Statement};
use crate::bytecode::Opcode;
use crate::compiler::{CompileError, Compiler};
use crate::symbol::SymbolScope;

impl Compiler {
    /// Compile a statement
    pub(super) fn compile_statement(&mut self, statement: &Statement) -> Result<(), CompileError> {
        match statement {
            Statement::Let { name, value } => {
                self.compile_expression(value)?;
                let symbol = self.symbols.define(&name.value);
                match symbol.scope {
                    SymbolScope::Global => self.emit(Opcode::SetGlobal, &[symbol.index]),
                    SymbolScope::Local => self.emit(Opcode::SetLocal, &[symbol.index]),
                };
                Ok(())
            }
            Statement::Return { value } => {
                self.compile_expression(value)?;
                self.emit(Opcode::ReturnValue, &[]);
                Ok(())
            }
            Statement::Expression { expression } => {
                self.compile_expression(expression)?;
                self.emit(Opcode::Pop, &[]);
                Ok(())
            }
        }
    }

    /// Compile a block's statements in order
    pub(super) fn compile_block(&mut self, block: &BlockStatement) -> Result<(), CompileError> {
        for statement in &block.statements {
            self.compile_statement(statement)?;
        }
        Ok(())
    }
}
