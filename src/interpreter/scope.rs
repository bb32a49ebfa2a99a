use std::{
    cell::RefCell,
    collections::HashMap,
    hash::{Hash, Hasher},
    rc::Rc,
};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// The key an operator implementation is registered under.
///
/// A key is the operator name together with the runtime types of its
/// operands; unary operators leave the left slot empty. Types are compared
/// by pointer identity rather than structurally, so dispatch only ever finds
/// implementations registered against the exact type singletons the operands
/// carry.
#[derive(Debug, Clone)]
pub struct OpKey {
    name: String,
    lhs:  Option<Rc<Value>>,
    rhs:  Rc<Value>,
}

impl OpKey {
    /// Builds the key for an infix application.
    #[must_use]
    pub fn binary(name: &str, lhs: Rc<Value>, rhs: Rc<Value>) -> Self {
        Self { name: name.to_string(),
               lhs: Some(lhs),
               rhs }
    }

    /// Builds the key for a prefix application, with an empty left slot.
    #[must_use]
    pub fn unary(name: &str, rhs: Rc<Value>) -> Self {
        Self { name: name.to_string(),
               lhs: None,
               rhs }
    }

    /// The operator name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The left operand type, absent for unary keys.
    #[must_use]
    pub const fn lhs(&self) -> Option<&Rc<Value>> {
        self.lhs.as_ref()
    }

    /// The right operand type.
    #[must_use]
    pub const fn rhs(&self) -> &Rc<Value> {
        &self.rhs
    }
}

impl PartialEq for OpKey {
    fn eq(&self, other: &Self) -> bool {
        let lhs_matches = match (&self.lhs, &other.lhs) {
            (None, None) => true,
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        };
        self.name == other.name && lhs_matches && Rc::ptr_eq(&self.rhs, &other.rhs)
    }
}

impl Eq for OpKey {}

impl Hash for OpKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        match &self.lhs {
            Some(ty) => (Rc::as_ptr(ty) as usize).hash(state),
            None => 0_usize.hash(state),
        }
        (Rc::as_ptr(&self.rhs) as usize).hash(state);
    }
}

/// An operator implementation.
///
/// Called with the evaluated operands; the left slot is `None` for unary
/// applications.
pub type OpFn = Rc<dyn Fn(Option<&Rc<Value>>, &Rc<Value>) -> EvalResult<Rc<Value>>>;

/// A frame of name bindings and operator registrations.
///
/// Scopes form a tree linked by parent references, rooted at the single
/// global scope seeded at interpreter construction. Lookups walk the chain
/// towards the root; writes land in the frame that owns the binding.
pub struct Scope {
    parent:    Option<Rc<Scope>>,
    bindings:  RefCell<HashMap<String, Rc<Value>>>,
    operators: RefCell<HashMap<OpKey, OpFn>>,
}

impl Scope {
    /// Creates the root scope with no parent.
    #[must_use]
    pub fn global() -> Rc<Self> {
        Rc::new(Self { parent:    None,
                       bindings:  RefCell::new(HashMap::new()),
                       operators: RefCell::new(HashMap::new()), })
    }

    /// Creates a child scope chained to `parent`.
    #[must_use]
    pub fn child(parent: &Rc<Self>) -> Rc<Self> {
        Rc::new(Self { parent:    Some(Rc::clone(parent)),
                       bindings:  RefCell::new(HashMap::new()),
                       operators: RefCell::new(HashMap::new()), })
    }

    /// Binds `name` directly to `value` in this frame, shadowing any binding
    /// of the same name in enclosing scopes.
    pub fn define(&self, name: &str, value: Rc<Value>) {
        self.bindings.borrow_mut().insert(name.to_string(), value);
    }

    /// Pre-binds `name` in this frame to the uninitialised sentinel carrying
    /// its declared type.
    pub fn init_var(&self, name: &str, ty: Rc<Value>) {
        self.define(name, Value::uninit(ty));
    }

    /// Resolves `name` through the scope chain without reporting an error.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Rc<Value>> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(Rc::clone(value));
        }
        self.parent.as_ref().and_then(|parent| parent.lookup(name))
    }

    /// Resolves `name` through the scope chain.
    ///
    /// # Errors
    /// `UnknownVariable` when no enclosing scope binds the name.
    pub fn get_var(&self, name: &str) -> EvalResult<Rc<Value>> {
        self.lookup(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
    }

    /// Overwrites the nearest binding of `name` in the scope chain.
    ///
    /// # Errors
    /// `AssignmentToUnbound` when no enclosing scope binds the name.
    pub fn set_var(&self, name: &str, value: Rc<Value>) -> EvalResult<()> {
        let mut bindings = self.bindings.borrow_mut();
        if let Some(slot) = bindings.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        drop(bindings);

        match &self.parent {
            Some(parent) => parent.set_var(name, value),
            None => Err(RuntimeError::AssignmentToUnbound { name: name.to_string() }),
        }
    }

    /// Resolves an operator implementation through the scope chain.
    ///
    /// # Errors
    /// `UnknownOperator`, rendering both operand types, when no enclosing
    /// scope registers the key.
    pub fn get_op(&self, key: &OpKey) -> EvalResult<OpFn> {
        if let Some(op) = self.operators.borrow().get(key) {
            return Ok(Rc::clone(op));
        }

        match &self.parent {
            Some(parent) => parent.get_op(key),
            None => Err(RuntimeError::UnknownOperator { name: key.name().to_string(),
                                                        lhs:  key.lhs()
                                                                 .map(std::string::ToString::to_string),
                                                        rhs:  key.rhs().to_string(), }),
        }
    }

    /// Registers an operator implementation in this frame.
    pub fn set_op(&self, key: OpKey, op: OpFn) {
        self.operators.borrow_mut().insert(key, op);
    }

    /// Resolves `name` to a type value.
    ///
    /// # Errors
    /// `UnknownTypeName` when the name is unbound, `NotAType` when it is
    /// bound to a value that is not a type.
    pub fn atomic_type(&self, name: &str) -> EvalResult<Rc<Value>> {
        let value = self.lookup(name)
                        .ok_or_else(|| RuntimeError::UnknownTypeName { name: name.to_string() })?;
        if !value.is_type() {
            return Err(RuntimeError::NotAType { name: name.to_string() });
        }
        Ok(value)
    }

    /// The bindings owned by this frame, for display and inspection.
    #[must_use]
    pub fn bindings(&self) -> Vec<(String, Rc<Value>)> {
        self.bindings
            .borrow()
            .iter()
            .map(|(name, value)| (name.clone(), Rc::clone(value)))
            .collect()
    }
}

impl std::fmt::Debug for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scope")
         .field("bindings", &self.bindings.borrow().len())
         .field("operators", &self.operators.borrow().len())
         .field("has_parent", &self.parent.is_some())
         .finish()
    }
}
