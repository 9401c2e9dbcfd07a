//! AWS SNS client instrumentation for OpenTelemetry.
//!
//! This crate wraps outgoing calls to SNS, the AWS pub/sub notification
//! service, in trace spans. It does not talk to SNS itself: an integration
//! layer exposes each in-flight call through the [`SnsRequest`] trait and
//! invokes [`start_sns_span`] before the call is dispatched and
//! [`finalize_sns_span`] once it has completed. In between, the span rides
//! on the telemetry context attached to the request.
//!
//! Spans are only created for calls that already happen inside a trace: if
//! the request's context carries no active span, the hooks do nothing. SNS
//! calls are leaves of someone else's trace, never roots of their own.
//!
//! # Quick start
//!
//! ```
//! use opentelemetry::trace::{TraceContextExt, Tracer, TracerProvider};
//! use opentelemetry::Context;
//! use opentelemetry_sdk::trace::SdkTracerProvider;
//! use opentelemetry_sns::{PublishParams, SnsInstrumentation, SnsParams, SnsRequest};
//!
//! // Stand-in for the request type of an SNS client library.
//! struct OutgoingCall {
//!     cx: Context,
//!     params: SnsParams,
//!     error: Option<std::io::Error>,
//! }
//!
//! impl SnsRequest for OutgoingCall {
//!     fn context(&self) -> &Context {
//!         &self.cx
//!     }
//!     fn set_context(&mut self, cx: Context) {
//!         self.cx = cx;
//!     }
//!     fn params(&self) -> &SnsParams {
//!         &self.params
//!     }
//!     fn error(&self) -> Option<&(dyn std::error::Error + 'static)> {
//!         self.error.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
//!     }
//! }
//!
//! let provider = SdkTracerProvider::builder().build();
//! let instrumentation = SnsInstrumentation::new(provider.tracer("opentelemetry-sns"));
//!
//! // The SNS call happens somewhere inside an existing trace.
//! let parent = provider.tracer("app").start("handle-order");
//! let mut call = OutgoingCall {
//!     cx: Context::current_with_span(parent),
//!     params: SnsParams::Publish(
//!         PublishParams::default()
//!             .with_topic_arn("arn:aws:sns:us-east-1:123456789012:orders")
//!             .with_message("order 4711 shipped"),
//!     ),
//!     error: None,
//! };
//!
//! instrumentation.on_send(&mut call);
//! // ... the client library performs the call ...
//! instrumentation.on_complete(&mut call);
//! ```
//!
//! ## Crate Feature Flags
//!
//! * `internal-logs` (default): emit this crate's self-diagnostics through
//!   OpenTelemetry's internal logging macros.
#![warn(
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    unreachable_pub,
    unused
)]
#![cfg_attr(docsrs, feature(doc_cfg), deny(rustdoc::broken_intra_doc_links))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/open-telemetry/opentelemetry-rust/main/assets/logo.svg"
)]
#![cfg_attr(test, deny(warnings))]

pub mod attribute;
mod request;
mod span;

pub use request::{PublishParams, SnsParams, SnsRequest};
pub use span::{finalize_sns_span, start_sns_span, SnsInstrumentation, SPAN_NAME};
