/// Builds a [`List`] from its elements, like `vec!`.
///
/// # Examples
///
/// ```rust
/// use generic_collections::list;
///
/// let empty: generic_collections::generic::list::List<u8> = list![];
/// assert!(empty.is_empty());
///
/// let list = list![2, 4, 6];
/// assert_eq!(list.as_slice(), &[2, 4, 6]);
///
/// let zeros = list![0; 3];
/// assert_eq!(zeros.as_slice(), &[0, 0, 0]);
/// ```
///
/// [`List`]: crate::generic::list::List
#[macro_export]
macro_rules! list {
    () => {
        $crate::generic::list::List::new()
    };
    ($item:expr; $count:expr) => {
        $crate::generic::list::List::from(::std::vec![$item; $count])
    };
    ($($item:expr),+ $(,)?) => {
        $crate::generic::list::List::from(::std::vec![$($item),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::generic::list::List;

    #[test]
    fn test_list_macro_forms() {
        let empty: List<i32> = list![];
        assert!(empty.is_empty());

        assert_eq!(list![1, 2, 3], [1, 2, 3]);
        assert_eq!(list!["a", "b",], ["a", "b"]);
        assert_eq!(list![7; 2], [7, 7]);
    }
}
