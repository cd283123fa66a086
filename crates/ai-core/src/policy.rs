use crate::{TickContext, WorldMut};

/// A decision procedure run once per think tick.
///
/// Policies read perception through the world and act on it through [`WorldMut::perform`] (or
/// any collaborator callbacks they own).
pub trait Policy<W>: 'static
where
    W: WorldMut + 'static,
{
    fn think(&mut self, ctx: &TickContext, world: &mut W);
}
