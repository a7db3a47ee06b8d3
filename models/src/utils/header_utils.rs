use std::str::FromStr;

use headers::{
	authorization::{Bearer, Credentials},
	Authorization,
	CacheControl,
	Connection,
	ContentLength,
	ContentType,
	Cookie,
	Date,
	ETag,
	Error,
	Expires,
	Header,
	Host,
	LastModified,
	Location,
	Origin,
	Referer,
	RetryAfter,
	Server,
	SetCookie,
	StrictTransportSecurity,
	UserAgent,
	Vary,
};
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};

/// This struct represents a bearer token. It is used to authenticate a user's
/// request to the API. It is used as a header in requests to the API.
///
/// This is a wrapper around [`headers::authorization::Bearer`].
/// Example: Authorization: Bearer *token*
#[derive(Debug, Clone, PartialEq)]
pub struct BearerToken(pub Bearer);

impl FromStr for BearerToken {
	type Err = headers::Error;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		Ok(Self(
			Bearer::decode(
				&HeaderValue::from_str(&format!("Bearer {value}"))
					.map_err(|_| headers::Error::invalid())?,
			)
			.ok_or_else(headers::Error::invalid)?,
		))
	}
}

impl Header for BearerToken {
	fn name() -> &'static HeaderName {
		Authorization::<Bearer>::name()
	}

	fn decode<'i, I>(values: &mut I) -> Result<Self, Error>
	where
		Self: Sized,
		I: Iterator<Item = &'i HeaderValue>,
	{
		let value = values.next().ok_or_else(headers::Error::invalid)?;

		if !value
			.to_str()
			.map(|value| value.starts_with(Bearer::SCHEME))
			.unwrap_or(false)
		{
			return Err(headers::Error::invalid());
		}

		let value = Bearer::decode(value).ok_or_else(headers::Error::invalid)?;

		Ok(Self(value))
	}

	fn encode<E>(&self, values: &mut E)
	where
		E: Extend<HeaderValue>,
	{
		values.extend(std::iter::once(self.0.encode()))
	}
}

impl Serialize for BearerToken {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(self.0.token())
	}
}

impl<'de> Deserialize<'de> for BearerToken {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Authorization::bearer(&String::deserialize(deserializer)?)
			.map_err(serde::de::Error::custom)
			.map(|Authorization(val)| val)
			.map(Self)
	}
}

/// This trait is implemented for all types that can be used as a header in a
/// request to the API.
///
/// This trait is used in conjunction with the [`HasHeaders`] trait to ensure
/// that a request headers struct has all the required headers that are needed
/// for the query, body, etc.
///
/// This should be implemented for any struct that defines a header. It is
/// already implemented for all types that implement the [`Header`] trait
/// in the [`headers`] crate.
pub trait HasHeader<H>
where
	H: Header,
{
	/// A helper function that returns a reference to the header, so that the
	/// layers can pull a specific header out of an endpoint's header struct
	/// without knowing the concrete struct.
	fn get_header(&self) -> &H;
}

impl<H> HasHeader<H> for H
where
	H: Header,
{
	fn get_header(&self) -> &H {
		self
	}
}

/// This trait is implemented with tuples of elements as a generic (up to 8
/// elements) for any struct that has those headers.
///
/// It is used to ensure that a request headers struct has all the required
/// headers that are needed for the query, body, etc.
///
/// For example, given a struct `Foo` that has the headers `A` and `B`,
/// `HasHeaders<(A, B)>` is automatically implemented for `Foo` IF AND ONLY IF
/// `Foo` implements `HasHeader<A>` and `HasHeader<B>`.
///
/// A function that requires a certain set of headers can then take any struct
/// that has those headers, even if it has more:
/// ```rust
/// # use headers::{ContentType, UserAgent};
/// # use models::utils::{HasHeader, HasHeaders};
/// // A function that requires the `Content-Type` and `User-Agent` headers
/// fn foo<T>(headers: &T)
/// where
///     T: HasHeaders<(ContentType, UserAgent)>,
/// #    T: HasHeader<ContentType>,
/// #    T: HasHeader<UserAgent>,
/// {
///     let content_type: &ContentType = headers.get_header();
///     let user_agent: &UserAgent = headers.get_header();
///     // ...
/// }
/// ```
pub trait HasHeaders<T> {}

/// This macro implements [`HasHeaders`] of a tuple of headers for any struct
/// that implements [`HasHeader`] for every header in the tuple.
macro_rules! impl_has_headers {
	() => {
		impl<S> HasHeaders<()> for S {}
	};
	( $($headers:ident),+ $(,)? ) => {
		impl<$($headers,)* S> HasHeaders<($($headers,)*)> for S
		where
			$($headers: Header,)*
			S: $(HasHeader<$headers> +)*
		{
		}
	};
}

impl_has_headers!();
impl_has_headers!(H1);
impl_has_headers!(H1, H2);
impl_has_headers!(H1, H2, H3);
impl_has_headers!(H1, H2, H3, H4);
impl_has_headers!(H1, H2, H3, H4, H5);
impl_has_headers!(H1, H2, H3, H4, H5, H6);
impl_has_headers!(H1, H2, H3, H4, H5, H6, H7);
impl_has_headers!(H1, H2, H3, H4, H5, H6, H7, H8);

/// Marks a standard header type as being a headers struct of exactly itself,
/// so that a bare header can be used where a struct of headers is expected.
macro_rules! impl_has_headers_for_standard_header {
	[$($header:ident),+ $(,)?] => {
		$(impl HasHeaders<$header> for $header {})+
	};
}

impl_has_headers_for_standard_header![
	CacheControl,
	Connection,
	ContentLength,
	ContentType,
	Cookie,
	Date,
	ETag,
	Expires,
	Host,
	LastModified,
	Location,
	Origin,
	Referer,
	RetryAfter,
	Server,
	SetCookie,
	StrictTransportSecurity,
	UserAgent,
	Vary,
];

impl<C> HasHeaders<Authorization<C>> for Authorization<C> where C: Credentials {}

/// This trait is used to convert a struct to and from a [`HeaderMap`].
///
/// This is mostly used for internal purposes. It is implemented by hand for
/// every endpoint's header struct, since each struct knows exactly which
/// headers it is made up of.
pub trait Headers: Sized {
	/// Convert the struct to a [`HeaderMap`].
	fn to_header_map(&self) -> HeaderMap;
	/// Convert the struct from a [`HeaderMap`], returning an [`Error`] if a
	/// required header is missing or unparseable.
	fn from_header_map(map: &HeaderMap) -> Result<Self, headers::Error>;
}

impl Headers for () {
	fn to_header_map(&self) -> HeaderMap {
		HeaderMap::new()
	}

	fn from_header_map(_: &HeaderMap) -> Result<Self, headers::Error> {
		Ok(())
	}
}

/// This trait represents the response headers that are required for a certain
/// endpoint. It is used to ensure that a response headers struct has all the
/// required headers that are needed.
///
/// The response headers required should be mentioned as a tuple of headers so
/// that it can be used by the [`HasHeaders`] trait.
pub trait RequiresResponseHeaders {
	/// The response headers that are required for this struct to be a part of
	/// an endpoint. This should be a tuple of headers.
	type RequiredResponseHeaders;
}

impl RequiresResponseHeaders for () {
	type RequiredResponseHeaders = ();
}

/// This trait represents the request headers that are required for a certain
/// endpoint. It is used to ensure that a request headers struct has all the
/// required headers that are needed.
///
/// The request headers required should be mentioned as a tuple of headers so
/// that it can be used by the [`HasHeaders`] trait.
pub trait RequiresRequestHeaders {
	/// The request headers that are required for this struct to be a part of an
	/// endpoint. This should be a tuple of headers.
	type RequiredRequestHeaders;
}

impl RequiresRequestHeaders for () {
	type RequiredRequestHeaders = ();
}
