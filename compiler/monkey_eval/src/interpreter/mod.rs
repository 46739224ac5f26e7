//! The tree-walking evaluator.
//!
//! Statement sequences produce `Option<Value>`: `let` yields nothing, every
//! other statement yields its value. A `return` or runtime error leaves the
//! sequence early as an [`Unwind`]:
//!
//! - blocks pass `Unwind::Return` through untouched, so a return inside
//!   nested `if`s reaches the function it belongs to
//! - a call consumes `Unwind::Return` and uses its value as the result
//! - the program boundary unwraps a top-level return and turns an error into
//!   [`Value::Error`]

mod builder;

pub use builder::EvaluatorBuilder;

use std::cell::Cell;
use std::rc::Rc;

use monkey_ir::{Block, CallExpr, Expr, IfExpr, Program, Stmt};
use monkey_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::errors::wrong_argument_count;
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::value::Closure;
use crate::{builtins, Environment, EvalError, EvalResult, SharedPrintHandler, Unwind, Value};

/// Call depth allowed unless configured otherwise.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Evaluates programs against an [`Environment`].
///
/// The evaluator holds configuration only; all program state lives in the
/// environment passed to each call, so one evaluator can serve many
/// environments.
pub struct Evaluator {
    print_handler: SharedPrintHandler,
    builtins: bool,
    max_call_depth: usize,
    call_depth: Cell<usize>,
}

impl Evaluator {
    /// Evaluator printing to stdout with builtins enabled.
    pub fn new() -> Self {
        EvaluatorBuilder::new().build()
    }

    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::new()
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Evaluate a program. A program with no value (empty, or ending in
    /// `let`) evaluates to `Null`.
    pub fn evaluate_program(&self, program: &Program, env: &Environment) -> Value {
        self.run_program(program, env).unwrap_or(Value::Null)
    }

    /// Evaluate a program, keeping the distinction between "no value" and
    /// `Null`.
    ///
    /// Stops at the first top-level `return` or runtime error. A returned
    /// value is unwrapped; an error becomes [`Value::Error`].
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(statements = program.statements.len()),
        ret
    )]
    pub fn run_program(&self, program: &Program, env: &Environment) -> Option<Value> {
        self.call_depth.set(0);
        match self.eval_statements(&program.statements, env) {
            Ok(value) => value,
            Err(Unwind::Return(value)) => Some(value),
            Err(Unwind::Error(error)) => {
                debug!(%error, "runtime error");
                Some(Value::Error(error))
            }
        }
    }

    // Statements

    fn eval_statements(
        &self,
        statements: &[Stmt],
        env: &Environment,
    ) -> EvalResult<Option<Value>> {
        let mut last = None;
        for stmt in statements {
            last = self.eval_stmt(stmt, env)?;
        }
        Ok(last)
    }

    fn eval_stmt(&self, stmt: &Stmt, env: &Environment) -> EvalResult<Option<Value>> {
        match stmt {
            Stmt::Let(s) => {
                let value = self.eval_expr(&s.value, env)?;
                env.set(s.name.name.as_str(), value);
                Ok(None)
            }
            Stmt::Return(s) => Err(Unwind::Return(self.eval_expr(&s.value, env)?)),
            Stmt::Expr(s) => self.eval_expr(&s.expr, env).map(Some),
        }
    }

    /// Blocks share the surrounding scope and do not catch `return`.
    fn eval_block(&self, block: &Block, env: &Environment) -> EvalResult {
        Ok(self
            .eval_statements(&block.statements, env)?
            .unwrap_or(Value::Null))
    }

    // Expressions

    fn eval_expr(&self, expr: &Expr, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| match expr {
            Expr::Ident(ident) => self.lookup(&ident.name, env),
            Expr::Int(lit) => Ok(Value::Integer(lit.value)),
            Expr::Bool(lit) => Ok(Value::Boolean(lit.value)),
            Expr::Str(lit) => Ok(Value::string(lit.value.as_str())),
            Expr::Prefix(e) => {
                let operand = self.eval_expr(&e.operand, env)?;
                Ok(evaluate_unary(e.op, &operand)?)
            }
            Expr::Infix(e) => {
                let left = self.eval_expr(&e.left, env)?;
                let right = self.eval_expr(&e.right, env)?;
                Ok(evaluate_binary(&left, e.op, &right)?)
            }
            Expr::If(e) => self.eval_if(e, env),
            Expr::Function(literal) => Ok(Value::Function(Closure::new(
                Rc::clone(literal),
                env.clone(),
            ))),
            Expr::Call(call) => self.eval_call(call, env),
        })
    }

    fn lookup(&self, name: &str, env: &Environment) -> EvalResult {
        if let Some(value) = env.get(name) {
            return Ok(value);
        }
        if self.builtins {
            if let Some(builtin) = builtins::lookup(name) {
                return Ok(Value::Builtin(builtin));
            }
        }
        Err(EvalError::IdentifierNotFound {
            name: name.to_owned(),
        }
        .into())
    }

    fn eval_if(&self, expr: &IfExpr, env: &Environment) -> EvalResult {
        let condition = self.eval_expr(&expr.condition, env)?;
        if condition.is_truthy() {
            self.eval_block(&expr.consequence, env)
        } else if let Some(alternative) = &expr.alternative {
            self.eval_block(alternative, env)
        } else {
            Ok(Value::Null)
        }
    }

    fn eval_call(&self, call: &CallExpr, env: &Environment) -> EvalResult {
        let function = self.eval_expr(&call.function, env)?;
        let args = call
            .arguments
            .iter()
            .map(|arg| self.eval_expr(arg, env))
            .collect::<EvalResult<Vec<_>>>()?;
        self.apply_function(&function, &args)
    }

    /// Call `function` with already-evaluated arguments.
    pub fn apply_function(&self, function: &Value, args: &[Value]) -> EvalResult {
        match function {
            Value::Function(closure) => self.call_closure(closure, args),
            Value::Builtin(builtin) => {
                trace!(name = builtin.name(), args = args.len(), "call builtin");
                Ok(builtin.call(self, args)?)
            }
            other => Err(EvalError::NotAFunction { kind: other.kind() }.into()),
        }
    }

    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(depth = self.call_depth.get(), args = args.len())
    )]
    fn call_closure(&self, closure: &Closure, args: &[Value]) -> EvalResult {
        if closure.arity() != args.len() {
            return Err(wrong_argument_count(closure.arity(), args.len()).into());
        }

        let depth = self.call_depth.get();
        if depth >= self.max_call_depth {
            return Err(EvalError::CallDepthExceeded {
                limit: self.max_call_depth,
            }
            .into());
        }

        let call_env = Environment::new_enclosed(&closure.env);
        for (param, arg) in closure.literal.parameters.iter().zip(args) {
            call_env.set(param.name.as_str(), arg.clone());
        }

        self.call_depth.set(depth + 1);
        let result = self.eval_statements(&closure.literal.body.statements, &call_env);
        self.call_depth.set(depth);

        match result {
            Ok(value) => Ok(value.unwrap_or(Value::Null)),
            Err(Unwind::Return(value)) => Ok(value),
            Err(error @ Unwind::Error(_)) => Err(error),
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
