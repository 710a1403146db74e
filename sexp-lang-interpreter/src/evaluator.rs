use sexp_lang_core::ast::{self, Node};

use crate::object::{EvaluationError, Value, ValueKind};
use crate::symbol_table::SymbolTable;

/// Tree-walking evaluator. Borrows the syntax tree read-only and resolves
/// list operators against its symbol table.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    symbol_table: SymbolTable,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::with_symbol_table(SymbolTable::with_builtins())
    }

    pub fn with_symbol_table(symbol_table: SymbolTable) -> Self {
        Self { symbol_table }
    }

    pub fn eval_program(&self, program: &ast::Program) -> Result<Value, EvaluationError> {
        log::debug!("evaluating program: {}", program);
        let result = self.eval_forms(&program.forms);
        match &result {
            Ok(value) => log::debug!("evaluated to {}", value),
            Err(error) => log::warn!("evaluation failed: {}", error),
        }
        result
    }

    pub fn eval(&self, node: &Node) -> Result<Value, EvaluationError> {
        match node {
            Node::Program(forms) => self.eval_forms(forms),
            Node::List(elements) => self.eval_list(elements),
            Node::Number(value) => Ok(Value::Integer(*value)),
            Node::Symbol(name) => Ok(Value::Symbol(name.clone())),
        }
    }

    // Only the first top-level form is evaluated
    fn eval_forms(&self, forms: &[Node]) -> Result<Value, EvaluationError> {
        let Some(first) = forms.first() else {
            return Err(EvaluationError::EmptyProgram);
        };
        if forms.len() > 1 {
            log::debug!("ignoring {} trailing top-level forms", forms.len() - 1);
        }
        self.eval(first)
    }

    fn eval_list(&self, elements: &[Node]) -> Result<Value, EvaluationError> {
        let values = elements
            .iter()
            .map(|element| self.eval(element))
            .collect::<Result<Vec<_>, _>>()?;

        let Some((operator, arguments)) = values.split_first() else {
            return Err(EvaluationError::EmptyList);
        };
        let name = match operator {
            Value::Symbol(name) => name,
            _ => {
                return Err(EvaluationError::TypeMismatch {
                    expected: ValueKind::Symbol,
                    got: operator.clone(),
                })
            }
        };

        let function = self
            .symbol_table
            .resolve(name)
            .ok_or_else(|| EvaluationError::UnboundSymbol(name.clone()))?;

        log::trace!("applying {} to {:?}", name, arguments);
        function.call(arguments)
    }
}
