//! Expression lowering

use std::rc::Rc;

use crate::ast::Expression;
use crate::bytecode::Opcode;
use crate::compiler::{CompileError, Compiler};
use crate::symbol::SymbolScope;
use crate::value::{CompiledFunction, Value};

impl Compiler {
    /// Compile an expression, leaving its value on the stack
    pub(super) fn compile_expression(&mut self, expr: &Expression) -> Result<(), CompileError> {
        match expr {
            Expression::Integer(value) => {
                let idx = self.add_constant(Value::Integer(*value));
                self.emit(Opcode::Constant, &[idx]);
                Ok(())
            }
            Expression::String(value) => {
                let idx = self.add_constant(Value::string(value.clone()));
                self.emit(Opcode::Constant, &[idx]);
                Ok(())
            }
            Expression::Boolean(value) => {
                let opcode = if *value { Opcode::True } else { Opcode::False };
                self.emit(opcode, &[]);
                Ok(())
            }
            Expression::Identifier(ident) => {
                let symbol = self
                    .symbols
                    .resolve(&ident.value)
                    .cloned()
                    .ok_or_else(|| CompileError::UndefinedVariable(ident.value.clone()))?;
                match symbol.scope {
                    SymbolScope::Global => self.emit(Opcode::GetGlobal, &[symbol.index]),
                    SymbolScope::Local => self.emit(Opcode::GetLocal, &[symbol.index]),
                };
                Ok(())
            }
            Expression::Prefix { operator, right } => {
                self.compile_expression(right)?;
                match operator.as_str() {
                    "!" => self.emit(Opcode::Bang, &[]),
                    "-" => self.emit(Opcode::Minus, &[]),
                    other => return Err(CompileError::UnknownOperator(other.to_string())),
                };
                Ok(())
            }
            Expression::Infix {
                operator,
                left,
                right,
            } => self.compile_infix(operator, left, right),
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                self.compile_expression(condition)?;

                // Placeholder operand, patched once the branch end is known
                let jump_not_truthy = self.emit(Opcode::JumpNotTruthy, &[0xFFFF]);

                self.compile_block(consequence)?;
                self.remove_last_pop();

                let jump = self.emit(Opcode::Jump, &[0xFFFF]);

                let after_consequence = self.current_position();
                self.change_operand(jump_not_truthy, after_consequence);

                match alternative {
                    Some(alt) => {
                        self.compile_block(alt)?;
                        self.remove_last_pop();
                    }
                    None => {
                        self.emit(Opcode::Null, &[]);
                    }
                }

                let after_alternative = self.current_position();
                self.change_operand(jump, after_alternative);
                Ok(())
            }
            Expression::Function { parameters, body } => {
                self.enter_scope();

                for parameter in parameters {
                    self.symbols.define(&parameter.value);
                }

                if body.statements.is_empty() {
                    self.emit(Opcode::Return, &[]);
                } else {
                    self.compile_block(body)?;
                    self.remove_last_pop();

                    let ends_with_return = body
                        .statements
                        .last()
                        .is_some_and(|stmt| stmt.token_literal() == "return");
                    if !ends_with_return {
                        self.emit(Opcode::ReturnValue, &[]);
                    }
                }

                let num_locals = self.symbols.num_definitions();
                let instructions = self.leave_scope();

                let function = Value::CompiledFunction(Rc::new(CompiledFunction {
                    instructions,
                    num_locals,
                }));
                let idx = self.add_constant(function);
                self.emit(Opcode::Constant, &[idx]);
                Ok(())
            }
            Expression::Call {
                function,
                arguments,
            } => {
                self.compile_expression(function)?;
                for argument in arguments {
                    self.compile_expression(argument)?;
                }
                self.emit(Opcode::Call, &[arguments.len()]);
                Ok(())
            }
            Expression::Array(elements) => {
                for element in elements {
                    self.compile_expression(element)?;
                }
                self.emit(Opcode::Array, &[elements.len()]);
                Ok(())
            }
            Expression::Hash(pairs) => {
                // Emission order is keyed on the printed form so the
                // constant pool and bytecode come out deterministic
                let mut sorted: Vec<&(Expression, Expression)> = pairs.iter().collect();
                sorted.sort_by_key(|(key, _)| key.to_string());

                for (key, value) in sorted {
                    self.compile_expression(key)?;
                    self.compile_expression(value)?;
                }
                self.emit(Opcode::Hash, &[pairs.len()]);
                Ok(())
            }
            Expression::Index { left, index } => {
                self.compile_expression(left)?;
                self.compile_expression(index)?;
                self.emit(Opcode::Index, &[]);
                Ok(())
            }
        }
    }

    fn compile_infix(
        &mut self,
        operator: &str,
        left: &Expression,
        right: &Expression,
    ) -> Result<(), CompileError> {
        // `<` compiles as the reversed `>`: operands swap and GreaterThan
        // carries both comparisons
        if operator == "<" {
            self.compile_expression(right)?;
            self.compile_expression(left)?;
            self.emit(Opcode::GreaterThan, &[]);
            return Ok(());
        }

        self.compile_expression(left)?;
        self.compile_expression(right)?;

        match operator {
            "+" => self.emit(Opcode::Add, &[]),
            "-" => self.emit(Opcode::Sub, &[]),
            "*" => self.emit(Opcode::Mul, &[]),
            "/" => self.emit(Opcode::Div, &[]),
            "==" => self.emit(Opcode::Equal, &[]),
            "!=" => self.emit(Opcode::NotEqual, &[]),
            ">" => self.emit(Opcode::GreaterThan, &[]),
            other => return Err(CompileError::UnknownOperator(other.to_string())),
        };
        Ok(())
    }
}
