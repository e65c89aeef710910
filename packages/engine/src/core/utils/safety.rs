//! Checked-in-debug cell access
//!
//! Grid reads go through `fast!` after the caller has already done the
//! bounds check. Debug builds keep the slice check so a bad index panics
//! with a clear message; release builds read unchecked.
//!
//! ```rust
//! use sandfall_engine::fast;
//!
//! let cells = vec![0u8, 1, 2];
//! assert_eq!(*fast!(cells, [1]), 1);
//! ```

#[macro_export]
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            // SAFETY: callers check bounds before indexing
            unsafe { $slice.get_unchecked($index) }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn reads_in_bounds() {
        let cells = vec![4u8, 5, 6];
        assert_eq!(*fast!(cells, [2]), 6);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn panics_out_of_bounds_in_debug() {
        let cells = vec![4u8, 5, 6];
        let _ = *fast!(cells, [3]);
    }
}
