//! The request-side surface this instrumentation hooks into.
//!
//! An SNS client integration drives the span lifecycle by exposing each
//! outgoing call through [`SnsRequest`]: the telemetry [`Context`] carried
//! for the duration of the call, the call's parameters, and the outcome
//! reported once the call has completed. [`SnsParams`] classifies the call
//! and owns the mapping from parameter fields to span attributes.

use opentelemetry::trace::SpanKind;
use opentelemetry::{Context, KeyValue};
use opentelemetry_semantic_conventions as semconv;

use crate::attribute;

/// An in-flight SNS call as seen by the host SDK.
///
/// Implemented by the integration layer over whatever request type the SNS
/// client library uses. The same request instance must be presented to both
/// lifecycle hooks: [`start_sns_span`] stores the span it creates in the
/// request's context, and [`finalize_sns_span`] picks it up from there.
///
/// [`start_sns_span`]: crate::start_sns_span
/// [`finalize_sns_span`]: crate::finalize_sns_span
pub trait SnsRequest {
    /// Returns the telemetry context currently attached to this request.
    fn context(&self) -> &Context;

    /// Replaces the telemetry context attached to this request.
    fn set_context(&mut self, cx: Context);

    /// Returns the parameters of the call this request performs.
    fn params(&self) -> &SnsParams;

    /// Returns the failure reported for this call, if any.
    ///
    /// `None` before the call has completed and after a successful
    /// completion.
    fn error(&self) -> Option<&(dyn std::error::Error + 'static)>;
}

/// Parameters of a single SNS call, keyed by call category.
///
/// Each recognized category carries the fields its operation addresses a
/// message with and maps to its own set of span attributes; calls without a
/// recognized category use [`SnsParams::Other`] and contribute no
/// category-specific attributes.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum SnsParams {
    /// A `Publish` call delivering a message to a topic, a platform
    /// endpoint, or a phone number.
    Publish(PublishParams),
    /// Any other SNS operation.
    Other,
}

impl SnsParams {
    /// Returns the kind for the span wrapping this call.
    ///
    /// Message sends are [`SpanKind::Producer`]; everything else is an
    /// ordinary remote call, [`SpanKind::Client`].
    pub fn span_kind(&self) -> SpanKind {
        match self {
            SnsParams::Publish(_) => SpanKind::Producer,
            _ => SpanKind::Client,
        }
    }

    /// Returns the initial attributes for the span wrapping this call.
    ///
    /// Always contains `messaging.system`. Addressing attributes are added
    /// per category, and only for fields that are actually set; absent
    /// fields are omitted rather than recorded as empty values.
    pub fn span_attributes(&self) -> Vec<KeyValue> {
        let mut attributes = vec![KeyValue::new(
            semconv::attribute::MESSAGING_SYSTEM,
            attribute::MESSAGING_SYSTEM_AWS_SNS,
        )];
        if let SnsParams::Publish(params) = self {
            params.append_attributes(&mut attributes);
        }
        attributes
    }
}

/// Addressing fields of a `Publish` call.
///
/// All fields are optional. SNS itself requires exactly one of the topic
/// ARN, the target ARN, or the phone number per call, but this type does not
/// enforce that; it mirrors whatever the client library is about to send.
///
/// # Examples
///
/// ```
/// use opentelemetry_sns::{PublishParams, SnsParams};
///
/// let params = SnsParams::Publish(
///     PublishParams::default()
///         .with_topic_arn("arn:aws:sns:us-east-1:123456789012:mytopic")
///         .with_subject("order shipped"),
/// );
/// // messaging.system, the topic ARN, and the subject; nothing for the
/// // fields that were left unset.
/// assert_eq!(params.span_attributes().len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PublishParams {
    /// ARN of the topic the message is published to.
    pub topic_arn: Option<String>,
    /// ARN of the platform endpoint the message is sent to directly.
    pub target_arn: Option<String>,
    /// Phone number for direct SMS delivery.
    pub phone_number: Option<String>,
    /// Subject line attached to the message.
    pub subject: Option<String>,
    /// The message body. Payload, not addressing; never recorded on spans.
    pub message: Option<String>,
}

impl PublishParams {
    /// Assign the topic ARN.
    pub fn with_topic_arn<T: Into<String>>(mut self, topic_arn: T) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }

    /// Assign the target ARN.
    pub fn with_target_arn<T: Into<String>>(mut self, target_arn: T) -> Self {
        self.target_arn = Some(target_arn.into());
        self
    }

    /// Assign the destination phone number.
    pub fn with_phone_number<T: Into<String>>(mut self, phone_number: T) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    /// Assign the message subject.
    pub fn with_subject<T: Into<String>>(mut self, subject: T) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Assign the message body.
    pub fn with_message<T: Into<String>>(mut self, message: T) -> Self {
        self.message = Some(message.into());
        self
    }

    fn append_attributes(&self, attributes: &mut Vec<KeyValue>) {
        if let Some(topic_arn) = &self.topic_arn {
            attributes.push(KeyValue::new(attribute::AWS_SNS_TOPIC_ARN, topic_arn.clone()));
        }
        if let Some(target_arn) = &self.target_arn {
            attributes.push(KeyValue::new(attribute::AWS_SNS_TARGET_ARN, target_arn.clone()));
        }
        if let Some(phone_number) = &self.phone_number {
            attributes.push(KeyValue::new(attribute::AWS_SNS_PHONE_NUMBER, phone_number.clone()));
        }
        if let Some(subject) = &self.subject {
            attributes.push(KeyValue::new(attribute::AWS_SNS_SUBJECT, subject.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::Value;

    fn lookup(attributes: &[KeyValue], key: &'static str) -> Option<Value> {
        attributes
            .iter()
            .find(|kv| kv.key.as_str() == key)
            .map(|kv| kv.value.clone())
    }

    #[test]
    fn publish_attributes_cover_set_fields() {
        let params = SnsParams::Publish(
            PublishParams::default()
                .with_topic_arn("test-topic-arn")
                .with_target_arn("test-target-arn")
                .with_phone_number("test-phone-no")
                .with_subject("test-subject")
                .with_message("message content"),
        );

        let attributes = params.span_attributes();
        assert_eq!(
            lookup(&attributes, semconv::attribute::MESSAGING_SYSTEM),
            Some(Value::from(attribute::MESSAGING_SYSTEM_AWS_SNS))
        );
        assert_eq!(
            lookup(&attributes, attribute::AWS_SNS_TOPIC_ARN),
            Some(Value::from("test-topic-arn"))
        );
        assert_eq!(
            lookup(&attributes, attribute::AWS_SNS_TARGET_ARN),
            Some(Value::from("test-target-arn"))
        );
        assert_eq!(
            lookup(&attributes, attribute::AWS_SNS_PHONE_NUMBER),
            Some(Value::from("test-phone-no"))
        );
        assert_eq!(
            lookup(&attributes, attribute::AWS_SNS_SUBJECT),
            Some(Value::from("test-subject"))
        );
    }

    #[test]
    fn publish_attributes_skip_missing_fields() {
        let params = SnsParams::Publish(
            PublishParams::default()
                .with_message("hi")
                .with_phone_number("555-1234"),
        );

        let attributes = params.span_attributes();
        assert_eq!(
            lookup(&attributes, attribute::AWS_SNS_PHONE_NUMBER),
            Some(Value::from("555-1234"))
        );
        assert_eq!(lookup(&attributes, attribute::AWS_SNS_TOPIC_ARN), None);
        assert_eq!(lookup(&attributes, attribute::AWS_SNS_TARGET_ARN), None);
        assert_eq!(lookup(&attributes, attribute::AWS_SNS_SUBJECT), None);
    }

    #[test]
    fn message_body_is_not_an_attribute() {
        let params = SnsParams::Publish(PublishParams::default().with_message("secret"));

        let attributes = params.span_attributes();
        assert_eq!(attributes.len(), 1);
        assert!(attributes.iter().all(|kv| kv.value.as_str() != "secret"));
    }

    #[test]
    fn empty_publish_reports_only_the_messaging_system() {
        let attributes = SnsParams::Publish(PublishParams::default()).span_attributes();
        assert_eq!(attributes.len(), 1);
        assert_eq!(
            attributes[0].key.as_str(),
            semconv::attribute::MESSAGING_SYSTEM
        );
    }

    #[test]
    fn other_calls_report_only_the_messaging_system() {
        let attributes = SnsParams::Other.span_attributes();
        assert_eq!(attributes.len(), 1);
        assert_eq!(
            attributes[0].key.as_str(),
            semconv::attribute::MESSAGING_SYSTEM
        );
    }

    #[test]
    fn span_kind_by_call_category() {
        let publish = SnsParams::Publish(PublishParams::default());
        assert_eq!(publish.span_kind(), SpanKind::Producer);
        assert_eq!(SnsParams::Other.span_kind(), SpanKind::Client);
    }
}
