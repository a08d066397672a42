#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("the job was dropped before it produced a value")]
	Abandoned,
}
