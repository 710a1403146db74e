use std::{collections::HashMap, rc::Rc};

use sexp_lang_core::lexer::is_symbol_char;
use thiserror::Error;

use crate::builtins::{self, BuiltinFunction};

#[derive(Debug, PartialEq, Error)]
pub enum RegistrationError {
    #[error("Invalid builtin name: {0:?}")]
    InvalidName(Rc<str>),
    #[error("Builtin already defined: {0}")]
    AlreadyDefined(Rc<str>),
}

/// Maps operator names to built-in functions. Lookups are exact and
/// case-sensitive.
#[derive(Debug, PartialEq, Clone)]
pub struct SymbolTable {
    store: HashMap<Rc<str>, BuiltinFunction>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable {
            store: HashMap::new(),
        }
    }

    pub fn with_builtins() -> SymbolTable {
        let mut symbol_table = SymbolTable::new();
        for builtin in builtins::builtins() {
            let registered = symbol_table.define_builtin(builtin);
            debug_assert!(registered.is_ok(), "invalid builtin: {:?}", registered);
        }
        symbol_table
    }

    /// Only names the parser could produce as a symbol are accepted, anything
    /// else could never be looked up.
    pub fn define_builtin(&mut self, builtin: BuiltinFunction) -> Result<(), RegistrationError> {
        let name: Rc<str> = builtin.name.into();
        if name.is_empty() || !name.chars().all(is_symbol_char) {
            return Err(RegistrationError::InvalidName(name));
        }
        if self.store.contains_key(&name) {
            return Err(RegistrationError::AlreadyDefined(name));
        }
        self.store.insert(name, builtin);
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Option<&BuiltinFunction> {
        self.store.get(name)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::{RegistrationError, SymbolTable};
    use crate::builtins::{builtins, BuiltinFunction};

    fn product(args: &[i64]) -> Option<i64> {
        args.iter().try_fold(1i64, |acc, value| acc.checked_mul(*value))
    }

    #[test]
    fn test_resolve_builtins() {
        let symbol_table = SymbolTable::with_builtins();

        assert_eq!(symbol_table.resolve("+").map(|f| f.name), Some("+"));
        assert_eq!(symbol_table.resolve("-"), None);
        assert_eq!(symbol_table.resolve("foo"), None);
    }

    #[test]
    fn test_builtins_register_cleanly() {
        let mut symbol_table = SymbolTable::new();

        for builtin in builtins() {
            assert_eq!(symbol_table.define_builtin(builtin), Ok(()));
        }
        assert_eq!(symbol_table, SymbolTable::with_builtins());
    }

    #[test]
    fn test_define_builtin() {
        let mut symbol_table = SymbolTable::new();
        let times = BuiltinFunction {
            name: "*",
            func: product,
        };

        assert_eq!(symbol_table.define_builtin(times.clone()), Ok(()));
        assert_eq!(symbol_table.resolve("*"), Some(&times));
        assert_eq!(
            symbol_table.define_builtin(times),
            Err(RegistrationError::AlreadyDefined("*".into()))
        );
    }

    #[test]
    fn test_define_builtin_invalid_name() {
        let tests = vec!["", "times2", "a b", "(x)", "#"];

        for name in tests {
            let mut symbol_table = SymbolTable::new();
            assert_eq!(
                symbol_table.define_builtin(BuiltinFunction {
                    name,
                    func: product,
                }),
                Err(RegistrationError::InvalidName(name.into()))
            );
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut symbol_table = SymbolTable::new();
        symbol_table
            .define_builtin(BuiltinFunction {
                name: "mul",
                func: product,
            })
            .unwrap();

        assert!(symbol_table.resolve("mul").is_some());
        assert!(symbol_table.resolve("MUL").is_none());
    }
}
