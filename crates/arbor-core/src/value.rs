// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Property values and the invocable-capability probe.
//!
//! Arbor passes arbitrary values through component properties and event
//! slots. A slot may hold plain data or something callable (an event
//! handler). Rather than sniffing a value's shape at each call site, the
//! value model is a closed sum type: callability is an explicit variant
//! carrying an [`Invocable`] payload, and [`is_invocable`] answers the
//! capability question totally — for every input, without panicking.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::ident::{InstanceId, NodeId};

/// Receiver context passed to a handler when it is invoked.
///
/// Models "invoke with explicit receiver": the handler runs on behalf of a
/// node, and optionally on behalf of one of that node's components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvokeContext {
    /// Node on whose behalf the handler runs.
    pub node: NodeId,
    /// Component that triggered the invocation, when one did.
    pub component: Option<InstanceId>,
}

impl InvokeContext {
    /// Context for a handler invoked directly on a node.
    #[must_use]
    pub const fn for_node(node: NodeId) -> Self {
        Self {
            node,
            component: None,
        }
    }
}

/// A callable collaborator: something a property slot can hold that the
/// framework may invoke with an explicit receiver and an argument list.
///
/// Implementations must not assume anything about the caller beyond the
/// provided context; they may be invoked zero or more times and must be safe
/// to share across the scene (`Send + Sync`).
pub trait Invocable: Send + Sync {
    /// Invokes the handler on behalf of `ctx` with positional `args`.
    fn invoke(&self, ctx: &InvokeContext, args: &[PropValue]) -> PropValue;
}

/// Cheap-clone wrapper around an [`Invocable`] payload.
///
/// Equality is identity: two handlers compare equal only when they wrap the
/// same allocation. There is no structural equality for callables.
#[derive(Clone)]
pub struct Handler(Arc<dyn Invocable>);

impl Handler {
    /// Wraps an invocable payload.
    pub fn new(inner: Arc<dyn Invocable>) -> Self {
        Self(inner)
    }

    /// Adapts a plain closure into a handler.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&InvokeContext, &[PropValue]) -> PropValue + Send + Sync + 'static,
    {
        struct FnInvocable<F>(F);

        impl<F> Invocable for FnInvocable<F>
        where
            F: Fn(&InvokeContext, &[PropValue]) -> PropValue + Send + Sync,
        {
            fn invoke(&self, ctx: &InvokeContext, args: &[PropValue]) -> PropValue {
                (self.0)(ctx, args)
            }
        }

        Self(Arc::new(FnInvocable(f)))
    }

    /// Invokes the wrapped payload.
    pub fn invoke(&self, ctx: &InvokeContext, args: &[PropValue]) -> PropValue {
        self.0.invoke(ctx, args)
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl core::fmt::Debug for Handler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Handler(..)")
    }
}

/// A value held by a property or event slot.
///
/// The set of variants is closed on purpose: every capability the framework
/// discriminates on (today, only callability) is an explicit variant, so
/// probes are exact rather than structural.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PropValue {
    /// No value set. Distinct from an empty record or list.
    #[default]
    Absent,
    /// Boolean scalar.
    Bool(bool),
    /// Numeric scalar.
    Number(f64),
    /// Text scalar.
    Text(String),
    /// Ordered sequence of values.
    List(Vec<PropValue>),
    /// Plain data record keyed by field name.
    Record(FxHashMap<String, PropValue>),
    /// Callable payload.
    Handler(Handler),
}

impl PropValue {
    /// Builds a record value from field pairs.
    #[must_use]
    pub fn record<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (String, PropValue)>,
    {
        Self::Record(fields.into_iter().collect())
    }

    /// Returns the handler payload when this value is callable.
    #[must_use]
    pub fn as_handler(&self) -> Option<&Handler> {
        match self {
            Self::Handler(h) => Some(h),
            _ => None,
        }
    }
}

/// Capability probe: can `value` be invoked as a handler?
///
/// Total and infallible for every input. Absent values, scalars, and plain
/// data records or lists lack the capability and yield `false`; only a value
/// carrying a handler payload yields `true`. The judgment is recomputed on
/// each call and never cached.
#[must_use]
pub fn is_invocable(value: &PropValue) -> bool {
    matches!(value, PropValue::Handler(_))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn probe_rejects_data_and_accepts_handlers() {
        assert!(!is_invocable(&PropValue::Absent));
        assert!(!is_invocable(&PropValue::Number(42.0)));
        assert!(!is_invocable(&PropValue::Text("a string".to_owned())));
        assert!(!is_invocable(&PropValue::Record(FxHashMap::default())));
        assert!(!is_invocable(&PropValue::record([(
            "value".to_owned(),
            PropValue::Number(10.0)
        )])));

        let handler = Handler::from_fn(|_, _| PropValue::Absent);
        assert!(is_invocable(&PropValue::Handler(handler)));
    }

    #[test]
    fn handler_equality_is_identity() {
        let a = Handler::from_fn(|_, _| PropValue::Absent);
        let b = Handler::from_fn(|_, _| PropValue::Absent);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn from_fn_handler_sees_receiver_and_args() {
        let handler = Handler::from_fn(|ctx, args| {
            assert_eq!(args.len(), 1);
            PropValue::Text(ctx.node.to_string())
        });
        let node = NodeId::from_raw(7);
        let out = handler.invoke(&InvokeContext::for_node(node), &[PropValue::Bool(true)]);
        assert_eq!(out, PropValue::Text("7".to_owned()));
    }
}
