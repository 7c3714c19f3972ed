//! Extraction of real-world-shaped documentation HTML.

use aws_docs_mcp::docs::{extract_content_from_html, extract_or_sentinel};

fn fixture() -> &'static str {
    include_str!("fixtures/lambda_sns_raw.html")
}

#[test]
fn test_main_content_is_extracted() {
    let markdown = extract_content_from_html(fixture()).unwrap();

    assert!(markdown.contains("Using AWS Lambda with Amazon SNS"));
    assert!(markdown.contains("process Amazon SNS notifications"));
    assert!(markdown.contains("Configuring the subscription"));
    assert!(markdown.contains("Subscribe the function to the topic"));
}

#[test]
fn test_code_blocks_survive_conversion() {
    let markdown = extract_content_from_html(fixture()).unwrap();

    assert!(markdown.contains("import { Construct } from 'constructs';"));
    assert!(markdown.contains("import { Stack, StackProps } from 'aws-cdk-lib';"));
    assert!(markdown.contains("from aws_solutions_constructs.aws_lambda_sns import LambdaToSns"));
    assert!(markdown.contains("aws_lambda as _lambda,"));
}

#[test]
fn test_language_tabs_survive_in_order() {
    let markdown = extract_content_from_html(fixture()).unwrap();

    let typescript_pos = markdown
        .find("Typescript")
        .expect("Typescript tab heading missing");
    let typescript_code_pos = markdown
        .find("import { Construct } from 'constructs';")
        .expect("TypeScript code missing");
    let python_code_pos = markdown
        .find("from aws_solutions_constructs.aws_lambda_sns import LambdaToSns")
        .expect("Python code missing");

    assert!(typescript_pos < typescript_code_pos);
    assert!(typescript_code_pos < python_code_pos);
}

#[test]
fn test_scripts_and_chrome_are_dropped() {
    let markdown = extract_content_from_html(fixture()).unwrap();

    assert!(!markdown.contains("console.log"));
    assert!(!markdown.contains("Previous topic"));
    assert!(!markdown.contains("Javascript is disabled"));
    assert!(!markdown.contains("Share this page"));
    assert!(!markdown.contains("Did this page help you?"));
    assert!(!markdown.contains("We use cookies."));
}

#[test]
fn test_headings_appear_before_code() {
    let markdown = extract_content_from_html(fixture()).unwrap();

    let overview_pos = markdown
        .find("Using AWS Lambda with Amazon SNS")
        .expect("title missing");
    let code_pos = markdown
        .find("import { Construct } from 'constructs';")
        .expect("code missing");
    assert!(overview_pos < code_pos);
}

#[test]
fn test_empty_page_sentinel() {
    assert_eq!(extract_or_sentinel(""), "<e>Empty HTML content</e>");
}
