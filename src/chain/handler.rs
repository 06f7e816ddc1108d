/**
 * Handler Chain
 *
 * This module implements the short-circuiting validation chain.
 *
 * # Linking
 *
 * `HandlerChain::link` takes ownership of every node. A node can therefore
 * belong to exactly one chain and a `next` pointer can never loop back, so
 * there is no runtime cycle check. Rebuilding a chain means building new
 * nodes.
 *
 * # Evaluation
 *
 * Evaluation is an explicit loop over the linked nodes. The first node whose
 * rule fails ends the walk and its error is returned; later nodes are never
 * asked. A chain with no nodes accepts every request.
 *
 * # Sub-chains
 *
 * `HandlerRef` points at one node and everything linked after it. Handling a
 * request from a `HandlerRef` behaves exactly like the chain would from that
 * node onwards.
 */
use crate::shared::{Request, ValidationError};
use std::fmt;

/// One validation rule in a chain
///
/// Implementors only judge the request in front of them. Delegating to the
/// next node is done by the chain, not by the handler.
pub trait Handler: Send + Sync {
    /// Handler name (for logging and debugging)
    fn name(&self) -> &str;

    /// Run this handler's rule
    ///
    /// # Returns
    /// * `Some(error)` - The request is rejected here
    /// * `None` - The rule passed; the chain moves on
    fn check(&self, request: &Request) -> Option<ValidationError>;
}

/// Handler built from a closure
///
/// ```rust
/// use authflow::chain::{FnHandler, HandlerChain};
/// use authflow::shared::{Request, ValidationError};
///
/// let needs_email = FnHandler::new("needs_email", |request: &Request| {
///     request.email().is_none().then_some(ValidationError::EmptyEmail)
/// });
/// let chain = HandlerChain::link(vec![Box::new(needs_email)]);
/// assert_eq!(chain.handle(&Request::default()), Some(ValidationError::EmptyEmail));
/// ```
pub struct FnHandler<F> {
    name: String,
    rule: F,
}

impl<F> FnHandler<F>
where
    F: Fn(&Request) -> Option<ValidationError> + Send + Sync,
{
    pub fn new(name: impl Into<String>, rule: F) -> Self {
        Self {
            name: name.into(),
            rule,
        }
    }
}

impl<F> Handler for FnHandler<F>
where
    F: Fn(&Request) -> Option<ValidationError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, request: &Request) -> Option<ValidationError> {
        (self.rule)(request)
    }
}

/// An ordered, immutable sequence of linked handlers
#[derive(Default)]
pub struct HandlerChain {
    nodes: Vec<Box<dyn Handler>>,
}

impl HandlerChain {
    /// Link `nodes` in order and return the chain
    ///
    /// Each node's successor is the node that follows it in `nodes`. An empty
    /// sequence gives a chain that accepts everything.
    pub fn link(nodes: Vec<Box<dyn Handler>>) -> Self {
        tracing::debug!(
            "[Chain] Linked {} handlers: {}",
            nodes.len(),
            join_names(&nodes)
        );
        Self { nodes }
    }

    /// A chain with no handlers
    pub fn empty() -> Self {
        Self::default()
    }

    /// Start a fluent chain builder
    pub fn builder() -> ChainBuilder {
        ChainBuilder::default()
    }

    /// The first node, or `None` for an empty chain
    pub fn head(&self) -> Option<HandlerRef<'_>> {
        self.node(0)
    }

    /// The node at `position` and everything linked after it
    pub fn node(&self, position: usize) -> Option<HandlerRef<'_>> {
        let rest = self.nodes.get(position..)?;
        if rest.is_empty() {
            return None;
        }
        Some(HandlerRef { rest, position })
    }

    /// Validate `request` from the head of the chain
    ///
    /// # Returns
    /// The first failing handler's error, or `None` when every handler passes
    pub fn handle(&self, request: &Request) -> Option<ValidationError> {
        run(&self.nodes, 0, request)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Handler names in link order
    pub fn names(&self) -> Vec<&str> {
        self.nodes.iter().map(|node| node.name()).collect()
    }
}

impl FromIterator<Box<dyn Handler>> for HandlerChain {
    fn from_iter<T: IntoIterator<Item = Box<dyn Handler>>>(iter: T) -> Self {
        Self::link(iter.into_iter().collect())
    }
}

impl fmt::Debug for HandlerChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerChain")
            .field("handlers", &self.names())
            .finish()
    }
}

/// A borrowed entry point into a chain: one node plus its successors
#[derive(Clone, Copy)]
pub struct HandlerRef<'a> {
    rest: &'a [Box<dyn Handler>],
    position: usize,
}

impl<'a> HandlerRef<'a> {
    /// Name of the node this reference points at
    pub fn name(&self) -> &'a str {
        match self.rest.first() {
            Some(node) => node.name(),
            None => "",
        }
    }

    /// Position of this node in its chain (head is 0)
    pub fn position(&self) -> usize {
        self.position
    }

    /// The successor node, if any
    pub fn next(&self) -> Option<HandlerRef<'a>> {
        let (_, tail) = self.rest.split_first()?;
        if tail.is_empty() {
            return None;
        }
        Some(HandlerRef {
            rest: tail,
            position: self.position + 1,
        })
    }

    /// Validate `request` starting at this node
    pub fn handle(&self, request: &Request) -> Option<ValidationError> {
        run(self.rest, self.position, request)
    }
}

impl fmt::Debug for HandlerRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRef")
            .field("name", &self.name())
            .field("position", &self.position)
            .finish()
    }
}

/// Fluent chain assembly: `builder().then(a).then(b).build()`
#[derive(Default)]
pub struct ChainBuilder {
    nodes: Vec<Box<dyn Handler>>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Link `handler` after the handlers added so far
    pub fn then<H>(mut self, handler: H) -> Self
    where
        H: Handler + 'static,
    {
        self.nodes.push(Box::new(handler));
        self
    }

    /// Link an already boxed handler
    pub fn then_boxed(mut self, handler: Box<dyn Handler>) -> Self {
        self.nodes.push(handler);
        self
    }

    pub fn build(self) -> HandlerChain {
        HandlerChain::link(self.nodes)
    }
}

fn run(nodes: &[Box<dyn Handler>], start: usize, request: &Request) -> Option<ValidationError> {
    for (offset, node) in nodes.iter().enumerate() {
        if let Some(error) = node.check(request) {
            tracing::debug!(
                "[Chain] {} (#{}) rejected {:?} request: {}",
                node.name(),
                start + offset,
                request.kind(),
                error.kind()
            );
            return Some(error);
        }
        tracing::trace!("[Chain] {} (#{}) passed", node.name(), start + offset);
    }
    None
}

fn join_names(nodes: &[Box<dyn Handler>]) -> String {
    nodes
        .iter()
        .map(|node| node.name())
        .collect::<Vec<_>>()
        .join(" > ")
}
