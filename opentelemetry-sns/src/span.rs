//! Span lifecycle hooks for outgoing SNS calls.
//!
//! [`start_sns_span`] runs before a request is dispatched and derives a
//! child span from the telemetry context already attached to the request;
//! [`finalize_sns_span`] runs once the request has completed and ends that
//! span, recording the failure if one was reported. A request whose context
//! carries no active span is left uninstrumented: an SNS call is only traced
//! as part of an existing trace, never as a root span of its own.

use opentelemetry::trace::{Status, TraceContextExt, Tracer};
use opentelemetry::{otel_debug, KeyValue};
use opentelemetry_semantic_conventions as semconv;

use crate::request::SnsRequest;

/// The operation name every span produced by this crate is reported under.
pub const SPAN_NAME: &str = "sns";

/// Position of a request in its span lifecycle.
///
/// Stored in the request's context next to the span itself. The marker is
/// how [`finalize_sns_span`] tells a span started by this crate apart from
/// an ambient span owned by the caller; only the former may be ended here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SpanPhase {
    Started,
    Finished,
}

/// Starts a span for an outgoing SNS call.
///
/// Invoke from the host SDK's pre-send hook. If the request's context
/// carries an active span, a child span named [`SPAN_NAME`] is created under
/// it, tagged with the attributes extracted from the call parameters, and
/// stored back into the request's context for [`finalize_sns_span`] to pick
/// up. If the context carries no active span this is a no-op and the
/// request is left untouched.
pub fn start_sns_span<R, T>(request: &mut R, tracer: &T)
where
    R: SnsRequest + ?Sized,
    T: Tracer,
    T::Span: Send + Sync + 'static,
{
    let cx = request.context().clone();
    if !cx.has_active_span() {
        otel_debug!(name: "SnsSpan.SkippedNoActiveSpan");
        return;
    }

    let params = request.params();
    let span = tracer
        .span_builder(SPAN_NAME)
        .with_kind(params.span_kind())
        .with_attributes(params.span_attributes())
        .start_with_context(tracer, &cx);
    otel_debug!(name: "SnsSpan.Started");
    request.set_context(cx.with_span(span).with_value(SpanPhase::Started));
}

/// Ends the span started for an SNS call.
///
/// Invoke from the host SDK's post-completion hook, on the same request that
/// was passed to [`start_sns_span`]. If the request reports an error, its
/// message is recorded under `exception.message` and the span status is set
/// to [`Status::Error`] before the span is ended. A request that carries no
/// span started by this crate, either because the starter never ran or
/// because the span was already finalized, is a no-op.
pub fn finalize_sns_span<R>(request: &mut R)
where
    R: SnsRequest + ?Sized,
{
    let cx = request.context().clone();
    if cx.get::<SpanPhase>() != Some(&SpanPhase::Started) {
        otel_debug!(name: "SnsSpan.FinalizeSkippedNotStarted");
        return;
    }

    let span = cx.span();
    if let Some(error) = request.error() {
        let message = error.to_string();
        span.set_attribute(KeyValue::new(semconv::attribute::EXCEPTION_MESSAGE, message.clone()));
        otel_debug!(name: "SnsSpan.EndedWithError", error = message.as_str());
        span.set_status(Status::error(message));
    } else {
        otel_debug!(name: "SnsSpan.Ended");
    }
    span.end();
    request.set_context(cx.with_value(SpanPhase::Finished));
}

/// Both lifecycle hooks bound to one tracer.
///
/// Integrations that register callbacks with an SNS client library can hold
/// one of these instead of threading a tracer through every call site.
#[derive(Debug)]
pub struct SnsInstrumentation<T> {
    tracer: T,
}

impl<T> SnsInstrumentation<T>
where
    T: Tracer,
    T::Span: Send + Sync + 'static,
{
    /// Creates an instrumentation that starts its spans with `tracer`.
    pub fn new(tracer: T) -> Self {
        SnsInstrumentation { tracer }
    }

    /// Pre-send hook; see [`start_sns_span`].
    pub fn on_send<R: SnsRequest + ?Sized>(&self, request: &mut R) {
        start_sns_span(request, &self.tracer);
    }

    /// Post-completion hook; see [`finalize_sns_span`].
    pub fn on_complete<R: SnsRequest + ?Sized>(&self, request: &mut R) {
        finalize_sns_span(request);
    }
}
