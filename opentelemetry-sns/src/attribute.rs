//! Attribute keys and values reported on SNS spans.
//!
//! Fields that identify where a message is going are recorded under the
//! `aws.sns.` namespace; cross-cutting keys (`messaging.system`,
//! `exception.message`) come from [`opentelemetry_semantic_conventions`].

/// The ARN of the topic a message is published to.
///
/// # Examples
///
/// - `"arn:aws:sns:us-east-1:123456789012:mytopic"`
pub const AWS_SNS_TOPIC_ARN: &str = "aws.sns.topic.arn";

/// The ARN of the endpoint (platform application or device) a message is
/// addressed to, for direct publishes.
///
/// # Examples
///
/// - `"arn:aws:sns:us-east-1:123456789012:endpoint/GCM/myapp/abcd1234"`
pub const AWS_SNS_TARGET_ARN: &str = "aws.sns.target.arn";

/// The phone number a message is delivered to, for SMS publishes.
///
/// # Examples
///
/// - `"+15555550100"`
pub const AWS_SNS_PHONE_NUMBER: &str = "aws.sns.phone_number";

/// The subject line attached to a published message.
pub const AWS_SNS_SUBJECT: &str = "aws.sns.subject";

/// The value reported for `messaging.system` on every span produced by this
/// crate.
pub const MESSAGING_SYSTEM_AWS_SNS: &str = "aws_sns";
