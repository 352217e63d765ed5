//! Tests for the URI helper subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_username_and_password() {
    match parse(&["flowlet", "username", "http://a:b@x/"]) {
        CliCommand::Username { uri } => assert_eq!(uri, "http://a:b@x/"),
        _ => panic!("expected Username"),
    }
    match parse(&["flowlet", "password", "http://a:b@x/"]) {
        CliCommand::Password { uri } => assert_eq!(uri, "http://a:b@x/"),
        _ => panic!("expected Password"),
    }
}

#[test]
fn cli_parse_relative_path() {
    match parse(&["flowlet", "relative-path", "http://x/a/b"]) {
        CliCommand::RelativePath { uri, base } => {
            assert_eq!(uri, "http://x/a/b");
            assert!(base.is_none());
        }
        _ => panic!("expected RelativePath"),
    }
}

#[test]
fn cli_parse_relative_path_with_base() {
    match parse(&["flowlet", "relative-path", "http://x/a/b", "--base", "http://x/a"]) {
        CliCommand::RelativePath { base, .. } => assert_eq!(base.as_deref(), Some("http://x/a")),
        _ => panic!("expected RelativePath"),
    }
}

#[test]
fn cli_parse_with_query() {
    match parse(&["flowlet", "with-query", "http://x/", "a=1&b[c]=2"]) {
        CliCommand::WithQuery { uri, query } => {
            assert_eq!(uri, "http://x/");
            assert_eq!(query, "a=1&b[c]=2");
        }
        _ => panic!("expected WithQuery"),
    }
}

#[test]
fn cli_parse_add_query() {
    match parse(&["flowlet", "add-query", "http://x/?a=1", "b=2"]) {
        CliCommand::AddQuery { uri, query } => {
            assert_eq!(uri, "http://x/?a=1");
            assert_eq!(query, "b=2");
        }
        _ => panic!("expected AddQuery"),
    }
}

#[test]
fn cli_parse_default_port() {
    match parse(&["flowlet", "default-port", "HTTPS"]) {
        CliCommand::DefaultPort { scheme } => assert_eq!(scheme, "HTTPS"),
        _ => panic!("expected DefaultPort"),
    }
}

#[test]
fn cli_parse_missing_argument_fails() {
    assert!(Cli::try_parse_from(["flowlet", "with-query", "http://x/"]).is_err());
}
