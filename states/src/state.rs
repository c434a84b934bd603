use std::any::Any;

/// A value registered in [`StateCtx`](crate::StateCtx).
///
/// `snapshot` hands an owned copy to commands. States no command reads can keep
/// the default, which leaves them out of every [`CommandSnapshot`](crate::CommandSnapshot).
pub trait State: Any + Send {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }
}
