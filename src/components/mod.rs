//! UI Components
//!
//! Reusable Leptos components.

mod clock;
mod countdown_display;
mod date_time_picker;
mod delete_entry_button;
mod drop_zone;
mod editable_text;
mod entry_input;
mod file_controls;
mod list_header;
mod nav_bar;
mod progress_bar;
mod saved_lists;
mod subtask_list;
mod task_item;
mod task_list;
mod todo_list;

pub use clock::{format_local, local_now, CurrentTimeDisplay};
pub use countdown_display::CountdownDisplay;
pub use date_time_picker::DateTimePicker;
pub use delete_entry_button::{DeleteEntryButton, EntryKind};
pub use drop_zone::DropZone;
pub use editable_text::EditableText;
pub use entry_input::EntryInput;
pub use file_controls::FileControls;
pub use list_header::ListHeader;
pub use nav_bar::NavBar;
pub use progress_bar::ProgressBar;
pub use saved_lists::{SavedListPage, SavedListsPage};
pub use subtask_list::SubtaskList;
pub use task_item::TaskItem;
pub use task_list::{provide_task_dnd, use_task_dnd, TaskDnd, TaskList, TaskScope};
pub use todo_list::TodoList;
