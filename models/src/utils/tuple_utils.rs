/// A helper trait to append a type to the end of a tuple of types. This is
/// what allows response-header requirements to accumulate across the path,
/// query, headers and body of an endpoint without any of them knowing about
/// the others.
///
/// ## Example Usage:
/// ```rust
/// use models::utils::AddTuple;
///
/// type Tuple = (u8, u16);
/// type ResultantTuple = <Tuple as AddTuple<u32>>::ResultantTuple; // (u8, u16, u32)
///
/// assert_eq!(
///     ResultantTuple::default(),
///     (u8::default(), u16::default(), u32::default()),
/// );
/// ```
pub trait AddTuple<T> {
	/// The resulting tuple after adding the type.
	type ResultantTuple;
}

impl<T> AddTuple<T> for () {
	type ResultantTuple = (T,);
}

/// A macro to implement [`AddTuple`] for tuples of different sizes. Endpoints
/// here never require more than a handful of headers, so implementations stop
/// at 8 elements. More can be stamped out below if a response ever grows past
/// that.
macro_rules! impl_add_tuples {
    ($($header:ident),+ $(,)?) => {
        impl<H, $($header,)*> AddTuple<H> for ($($header,)*) {
            type ResultantTuple = ($($header,)* H);
        }
    };
}

impl_add_tuples!(H1,);
impl_add_tuples!(H1, H2,);
impl_add_tuples!(H1, H2, H3,);
impl_add_tuples!(H1, H2, H3, H4,);
impl_add_tuples!(H1, H2, H3, H4, H5,);
impl_add_tuples!(H1, H2, H3, H4, H5, H6,);
impl_add_tuples!(H1, H2, H3, H4, H5, H6, H7,);
impl_add_tuples!(H1, H2, H3, H4, H5, H6, H7, H8,);
