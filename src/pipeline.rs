//! Request-pipeline contract the filter is inserted into.
//!
//! Hosts adapt their request and response types to [`HttpRequest`] and
//! [`HttpResponse`], then either drive [`CorsFilter::do_filter`] from their
//! own chain or register it on a [`Pipeline`].
//!
//! [`CorsFilter::do_filter`]: crate::CorsFilter::do_filter

use std::error::Error;
use std::sync::Arc;

pub type BoxError = Box<dyn Error + Send + Sync>;

pub trait HttpRequest {
    fn method(&self) -> &str;

    /// First value of the named header. Names compare case-insensitively.
    fn header(&self, name: &str) -> Option<&str>;
}

pub trait HttpResponse {
    /// Adds a header without replacing existing values of the same name.
    fn append_header(&mut self, name: &str, value: &str);

    fn set_status(&mut self, status: u16);
}

/// A request travelling through the pipeline, which may not be HTTP.
pub trait FilterRequest {
    fn as_http(&self) -> Option<&dyn HttpRequest>;
}

/// A response travelling through the pipeline, which may not be HTTP.
pub trait FilterResponse {
    fn as_http_mut(&mut self) -> Option<&mut dyn HttpResponse>;
}

/// The remainder of the pipeline after the current stage.
///
/// Consumed on use, so a stage can forward at most once.
pub trait FilterChain<Req: ?Sized, Res: ?Sized> {
    type Error;

    fn proceed(self, request: &Req, response: &mut Res) -> Result<(), Self::Error>;
}

impl<Req, Res, E, F> FilterChain<Req, Res> for F
where
    Req: ?Sized,
    Res: ?Sized,
    F: FnOnce(&Req, &mut Res) -> Result<(), E>,
{
    type Error = E;

    fn proceed(self, request: &Req, response: &mut Res) -> Result<(), E> {
        self(request, response)
    }
}

/// What a stage did with the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// The next stage was invoked.
    Forwarded,
    /// The stage answered the request itself.
    Terminated,
}

/// A stage that can be registered on a [`Pipeline`].
pub trait Filter<Req: ?Sized, Res: ?Sized>: Send + Sync {
    fn do_filter(
        &self,
        request: &Req,
        response: &mut Res,
        next: Next<'_, Req, Res>,
    ) -> Result<(), BoxError>;
}

pub type Endpoint<Req, Res> = dyn Fn(&Req, &mut Res) -> Result<(), BoxError> + Send + Sync;

/// Chain handed to a registered [`Filter`]: the filters after it, then the endpoint.
pub struct Next<'a, Req: ?Sized, Res: ?Sized> {
    filters: &'a [Arc<dyn Filter<Req, Res>>],
    endpoint: &'a Endpoint<Req, Res>,
}

impl<Req: ?Sized, Res: ?Sized> FilterChain<Req, Res> for Next<'_, Req, Res> {
    type Error = BoxError;

    fn proceed(self, request: &Req, response: &mut Res) -> Result<(), BoxError> {
        match self.filters.split_first() {
            Some((filter, rest)) => filter.do_filter(
                request,
                response,
                Next {
                    filters: rest,
                    endpoint: self.endpoint,
                },
            ),
            None => (self.endpoint)(request, response),
        }
    }
}

/// Ordered filters in front of a terminal endpoint.
pub struct Pipeline<Req: ?Sized, Res: ?Sized> {
    filters: Vec<Arc<dyn Filter<Req, Res>>>,
    endpoint: Box<Endpoint<Req, Res>>,
}

impl<Req: ?Sized, Res: ?Sized> Pipeline<Req, Res> {
    pub fn new<E>(endpoint: E) -> Self
    where
        E: Fn(&Req, &mut Res) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        Self {
            filters: Vec::new(),
            endpoint: Box::new(endpoint),
        }
    }

    /// Appends a filter; filters run in registration order.
    pub fn register<F>(&mut self, filter: F) -> &mut Self
    where
        F: Filter<Req, Res> + 'static,
    {
        self.filters.push(Arc::new(filter));
        self
    }

    pub fn register_shared(&mut self, filter: Arc<dyn Filter<Req, Res>>) -> &mut Self {
        self.filters.push(filter);
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn handle(&self, request: &Req, response: &mut Res) -> Result<(), BoxError> {
        Next {
            filters: &self.filters,
            endpoint: self.endpoint.as_ref(),
        }
        .proceed(request, response)
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
