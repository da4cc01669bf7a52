use crate::config::GateConfig;
use crate::gate::Gate;
use std::future::Future;

pub trait Paceable
where
    Self: std::marker::Sized,
{
    fn paced(self) -> Paced<Self>;
    fn paced_with(self, config: GateConfig) -> Paced<Self>;
}

impl<T> Paceable for T {
    fn paced(self) -> Paced<Self> {
        Paced::new(self)
    }
    fn paced_with(self, config: GateConfig) -> Paced<Self> {
        Paced::with_config(self, config)
    }
}

/// A value whose uses are spaced by a [`Gate`].
pub struct Paced<T> {
    inner: T,
    gate: Gate,
}

impl<T> Paced<T> {
    pub fn new(inner: T) -> Self {
        Self::with_gate(inner, Gate::default())
    }
    pub fn with_config(inner: T, config: GateConfig) -> Self {
        Self::with_gate(inner, Gate::new(config))
    }
    /// Wraps `inner` with an existing gate, sharing its timer with every other holder.
    pub fn with_gate(inner: T, gate: Gate) -> Self {
        Self { inner, gate }
    }
    pub fn inner(&self) -> &T {
        &self.inner
    }
    pub fn gate(&self) -> &Gate {
        &self.gate
    }
    pub fn into_inner(self) -> T {
        self.inner
    }
    /// Runs `operation` against the wrapped value through the gate.
    pub async fn execute<'a, F, Fut, R>(&'a self, operation: F) -> R
    where
        F: FnOnce(&'a T) -> Fut,
        Fut: Future<Output = R>,
    {
        self.gate.execute(|| operation(&self.inner)).await
    }
}
