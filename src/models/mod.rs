// Declare modules
pub mod event;
pub mod item;
pub mod note;
pub mod source;
pub mod todo;

// Re-export all public types so imports like `use dayplan::Note` work
// without spelling out the submodule path.
pub use event::{Event, EventKind};
pub use item::{Item, ItemKind};
pub use note::{NewNote, Note};
pub use source::EventSource;
pub use todo::{NewToDo, ToDo};
