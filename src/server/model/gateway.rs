/// Connection state of the Discord gateway as observed by the bot's event handler.
///
/// Commands received over HTTP are only accepted while the state is `Ready`, since
/// delivering the resulting message needs a live bot session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Ready,
}
