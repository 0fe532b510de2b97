//! Unit tests for request validation and parameter rendering.

use super::*;
use crate::instance_type::InstanceType;
use rstest::{fixture, rstest};
use serde_json::json;

const IMAGE: &str = "ami-0abcdef1234567890";
const INSTANCE: &str = "i-0123456789abcdef0";

#[fixture]
fn m5_large() -> InstanceType {
    InstanceType::from_string("m5.large").unwrap_or_else(|err| panic!("catalog: {err}"))
}

#[fixture]
fn run_request(m5_large: InstanceType) -> RunInstances {
    RunInstances::new(m5_large, IMAGE, 2)
}

#[rstest]
fn terminate_rejects_empty_target_set() {
    let err = TerminateInstances::new(Vec::<String>::new())
        .validate()
        .expect_err("empty targets must fail");
    assert_eq!(
        err,
        RequestError::EmptyTargetSet {
            field: "InstanceIds"
        }
    );
}

#[rstest]
fn terminate_drops_duplicate_ids_preserving_order() {
    let request = TerminateInstances::new(["i-0000000a", INSTANCE, "i-0000000a"]);
    assert_eq!(request.instance_ids(), ["i-0000000a", INSTANCE]);
    assert_eq!(
        Value::Object(request.parameters()),
        json!({ "InstanceIds": ["i-0000000a", INSTANCE] })
    );
}

#[rstest]
#[case("0123456789abcdef0")]
#[case("i-XYZ")]
#[case("i-0123456789ABCDEF0")]
#[case("i-0123456")]
#[case("ami-12345678")]
fn terminate_rejects_malformed_ids(#[case] id: &str) {
    let err = TerminateInstances::new([id])
        .validate()
        .expect_err("malformed id must fail");
    assert!(
        matches!(err, RequestError::InvalidField { field: "InstanceIds", ref value, .. } if value == id),
        "unexpected error: {err}"
    );
}

#[rstest]
fn run_rejects_zero_count(run_request: RunInstances) {
    let request = RunInstances {
        min_count: 0,
        ..run_request
    };
    assert_eq!(
        request.validate(),
        Err(RequestError::InvalidCount {
            field: "MinCount",
            value: 0,
            min: 1
        })
    );
}

#[rstest]
fn run_rejects_max_count_below_min(run_request: RunInstances) {
    let err = run_request
        .max_count(1)
        .validate()
        .expect_err("max below min must fail");
    assert_eq!(
        err,
        RequestError::InvalidCount {
            field: "MaxCount",
            value: 1,
            min: 2
        }
    );
    assert_eq!(err.to_string(), "MaxCount must be at least 2, got 1");
}

#[rstest]
#[case::bad_image("ImageId", |req: RunInstances| RunInstances { image_id: String::from("img-1234"), ..req })]
#[case::blank_key("KeyName", |req: RunInstances| req.key_name("  "))]
#[case::bad_group("SecurityGroupIds", |req: RunInstances| req.security_group_id("default"))]
#[case::bad_subnet("SubnetId", |req: RunInstances| req.subnet_id("subnet-nothex!"))]
#[case::blank_user_data("UserData", |req: RunInstances| req.user_data(Some(String::from(" \n"))))]
#[case::huge_user_data("UserData", |req: RunInstances| req.user_data(Some("x".repeat(16 * 1024 + 1))))]
#[case::empty_token("ClientToken", |req: RunInstances| req.client_token(""))]
#[case::reserved_tag("TagSpecifications", |req: RunInstances| req.tag("aws:owner", "me"))]
#[case::duplicate_tag("TagSpecifications", |req: RunInstances| req.tag("env", "a").tag("env", "b"))]
fn run_rejects_invalid_fields(
    run_request: RunInstances,
    #[case] field: &str,
    #[case] mutate: fn(RunInstances) -> RunInstances,
) {
    let err = mutate(run_request)
        .validate()
        .expect_err("invalid field must fail");
    assert!(
        matches!(err, RequestError::InvalidField { field: actual, .. } if actual == field),
        "expected {field} error, got {err}"
    );
}

#[rstest]
fn run_renders_minimal_parameters(run_request: RunInstances) {
    assert!(run_request.validate().is_ok());
    assert_eq!(
        Value::Object(run_request.parameters()),
        json!({
            "ImageId": IMAGE,
            "InstanceType": "m5.large",
            "MinCount": 2,
            "MaxCount": 2,
        })
    );
}

#[rstest]
fn run_renders_optional_parameters(run_request: RunInstances) {
    let request = run_request
        .max_count(4)
        .key_name("deploy")
        .security_group_id("sg-0123abcd")
        .subnet_id("subnet-0123abcd")
        .user_data(Some(String::from("#cloud-config\n")))
        .client_token("token-1")
        .tag("Name", "worker");
    assert!(request.validate().is_ok());
    assert_eq!(
        Value::Object(request.parameters()),
        json!({
            "ImageId": IMAGE,
            "InstanceType": "m5.large",
            "MinCount": 2,
            "MaxCount": 4,
            "KeyName": "deploy",
            "SecurityGroupIds": ["sg-0123abcd"],
            "SubnetId": "subnet-0123abcd",
            "UserData": "#cloud-config\n",
            "ClientToken": "token-1",
            "TagSpecifications": [{
                "ResourceType": "instance",
                "Tags": [{ "Key": "Name", "Value": "worker" }],
            }],
        })
    );
}

#[rstest]
fn generated_client_tokens_differ(run_request: RunInstances) {
    let first = run_request.clone().generated_client_token();
    let second = run_request.generated_client_token();
    assert!(first.validate().is_ok());
    assert_ne!(first.client_token, second.client_token);
}

#[rstest]
fn describe_without_parameters_is_valid() {
    let request = DescribeInstances::new();
    assert!(request.validate().is_ok());
    assert!(request.parameters().is_empty());
}

#[rstest]
fn describe_renders_filters_and_paging(m5_large: InstanceType) {
    let request = DescribeInstances::new()
        .filter(Filter::instance_type([m5_large]))
        .filter(Filter::state(["running", "pending"]))
        .filter(Filter::tag("team", ["infra"]))
        .max_results(50)
        .next_token("page-2");
    assert!(request.validate().is_ok());
    assert_eq!(
        Value::Object(request.parameters()),
        json!({
            "Filters": [
                { "Name": "instance-type", "Values": ["m5.large"] },
                { "Name": "instance-state-name", "Values": ["running", "pending"] },
                { "Name": "tag:team", "Values": ["infra"] },
            ],
            "MaxResults": 50,
            "NextToken": "page-2",
        })
    );
}

#[rstest]
#[case(4)]
#[case(1001)]
fn describe_rejects_page_size_out_of_range(#[case] value: u32) {
    let err = DescribeInstances::new()
        .max_results(value)
        .validate()
        .expect_err("page size must be bounded");
    assert_eq!(
        err,
        RequestError::OutOfRange {
            field: "MaxResults",
            value,
            min: 5,
            max: 1000
        }
    );
}

#[rstest]
fn describe_rejects_page_size_with_instance_ids() {
    let err = DescribeInstances::new()
        .instance_id(INSTANCE)
        .max_results(10)
        .validate()
        .expect_err("paging with ids must fail");
    assert!(
        matches!(err, RequestError::InvalidField { field: "MaxResults", .. }),
        "unexpected error: {err}"
    );
}

#[rstest]
fn describe_rejects_filter_without_values() {
    let err = DescribeInstances::new()
        .filter(Filter::new("instance-type", Vec::<String>::new()))
        .validate()
        .expect_err("empty filter must fail");
    assert_eq!(
        err.to_string(),
        "invalid Filters 'instance-type': filter must have at least one value"
    );
}

#[rstest]
#[case::blank_value(Filter::new("instance-type", [""]), "filter values must not be empty")]
#[case::whitespace_value(
    Filter::state(["running", "  "]),
    "filter values must not be empty"
)]
#[case::blank_tag_key(Filter::tag("", ["infra"]), "tag filters must name a key")]
#[case::blank_name(Filter::new(" ", ["running"]), "filter name must not be empty")]
fn describe_rejects_blank_filter_parts(#[case] filter: Filter, #[case] reason: &str) {
    let err = DescribeInstances::new()
        .filter(filter)
        .validate()
        .expect_err("blank filter part must fail");
    assert!(
        matches!(err, RequestError::InvalidField { field: "Filters", reason: ref actual, .. } if actual == reason),
        "unexpected error: {err}"
    );
}

#[rstest]
fn validated_into_call_carries_operation(run_request: RunInstances) {
    let call = run_request
        .validated()
        .unwrap_or_else(|err| panic!("valid request: {err}"))
        .into_call();
    assert_eq!(call.operation, Operation::RunInstances);
    assert_eq!(call.parameters.get("MinCount"), Some(&json!(2)));
}
