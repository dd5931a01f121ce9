//! # Generic Collections
//!
//! Small, generic convenience containers: an ordered [`List<T>`] with
//! search, splice and bulk-transform helpers, and a [`Map<K, V>`] adapter that
//! projects a hash map into its keys and values.
//!
//! ## Features
//!
//! - **[`List<T>`]** – `Vec`-backed ordered list; fallible operations return [`ListError`]
//! - **[`reduce`]** – left fold over a list with an accumulator of any type
//! - **[`Map<K, V>`]** – `HashMap` wrapper with `keys()` / `vals()` projections
//! - **[`PushPopCollection<T>`]** – trait abstraction over `push`, `pop`, `len` & slice access
//! - **[`ListOptions`]** – per-list switches for chunking and insertion bounds
//! - **[`list!`]** – `vec!`-style constructor for [`List<T>`]
//!
//! ## Error Handling
//!
//! Operations that need an element, an index or a match report it through
//! [`ListError`]: `Empty` always wins over `Index` on an empty list, and
//! `NotFound` is reserved for `replace`. Expected absence (`contains`,
//! `remove`, `index_of`) is signalled with `bool` / `Option` instead.
//!
//! Nothing here is synchronized; wrap a container in a lock to share it
//! between threads.
//!
//! ## Quick Examples
//!
//! ### Using List
//!
//! ```rust
//! use generic_collections::error::ListError;
//! use generic_collections::generic::list::{reduce, List};
//! use generic_collections::list;
//!
//! let mut list = list![2, 4, 6, 8];
//!
//! let chunks = list.chunk(2).unwrap();
//! assert_eq!(chunks, vec![list![2, 4], list![6, 8]]);
//!
//! list.remove_index(0).unwrap();
//! assert_eq!(reduce(&list, 0, |acc, n| acc + n), 18);
//!
//! let empty: List<i32> = List::new();
//! assert_eq!(empty.first(), Err(ListError::Empty));
//! ```
//!
//! ### Using Map
//!
//! ```rust
//! use generic_collections::generic::map::Map;
//!
//! let map: Map<&str, u32> = [("one", 1), ("two", 2)].into_iter().collect();
//!
//! // Order is unspecified; sort before comparing.
//! let mut keys = map.keys();
//! keys.sort();
//! assert_eq!(keys, vec!["one", "two"]);
//! ```
//!
//! ### Configuring a List
//!
//! ```rust
//! use generic_collections::config::{ChunkPolicy, ListOptions};
//! use generic_collections::error::ListError;
//! use generic_collections::generic::list::List;
//!
//! let options = ListOptions::default().with_chunk_policy(ChunkPolicy::Strict);
//! let mut list = List::with_options(options);
//! list.add_all([1, 2, 3]);
//!
//! assert_eq!(list.chunk(0), Err(ListError::InvalidChunkSize));
//! ```
//!
//! [`List<T>`]: generic::list::List
//! [`reduce`]: generic::list::reduce
//! [`Map<K, V>`]: generic::map::Map
//! [`PushPopCollection<T>`]: generic::push_pop::PushPopCollection
//! [`ListOptions`]: config::ListOptions
//! [`ListError`]: error::ListError
//! [`list!`]: macro@list

pub mod config;
pub mod error;
pub mod generic;
mod macros;
