mod helpers;

use ferrous_mdns_application::use_cases::{AnswerQueryUseCase, ReplyDestination};
use ferrous_mdns_domain::{DnsMessage, MdnsError, Question, RecordType};
use helpers::MockAliasRepository;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

const MDNS_PEER: &str = "192.168.1.20:5353";

fn peer() -> SocketAddr {
    MDNS_PEER.parse().unwrap()
}

fn use_case(entries: &[(&str, &[&str])]) -> AnswerQueryUseCase {
    AnswerQueryUseCase::new(Arc::new(MockAliasRepository::with(entries)), 120)
}

fn query_for(name: &str, record_type: RecordType) -> DnsMessage {
    DnsMessage::query(0x2a2a, vec![Question::new(name, record_type)])
}

// ── selective matching ─────────────────────────────────────────────────────

#[test]
fn test_matching_a_query_yields_one_answer() {
    let uc = use_case(&[("myhost.local", &["192.168.1.50"])]);

    let reply = uc
        .execute(&query_for("myhost.local", RecordType::A), peer())
        .expect("reply expected");

    let msg = &reply.message;
    assert_eq!(msg.id, 0x2a2a);
    assert!(msg.flags.qr);
    assert!(msg.flags.aa);
    assert_eq!(msg.questions.len(), 1);
    assert_eq!(msg.answers.len(), 1);

    let answer = &msg.answers[0];
    assert_eq!(&*answer.name, "myhost.local");
    assert_eq!(answer.record_type(), RecordType::A);
    assert_eq!(answer.class, 1);
    assert_eq!(answer.ttl, 120);
    assert_eq!(answer.ip_addr(), Some("192.168.1.50".parse().unwrap()));
}

#[test]
fn test_unknown_name_yields_no_reply() {
    let uc = use_case(&[("myhost.local", &["192.168.1.50"])]);
    assert!(matches!(
        uc.execute(&query_for("other.local", RecordType::A), peer()),
        Err(MdnsError::LookupMiss(name)) if name == "other.local"
    ));
}

#[test]
fn test_matching_is_case_and_trailing_dot_insensitive() {
    let uc = use_case(&[("myhost.local", &["192.168.1.50"])]);

    let reply = uc
        .execute(&query_for("MyHost.Local.", RecordType::A), peer())
        .unwrap();

    // The answer repeats the name exactly as asked.
    assert_eq!(&*reply.message.answers[0].name, "MyHost.Local.");
}

#[test]
fn test_aaaa_query_only_returns_ipv6() {
    let uc = use_case(&[("dual.local", &["10.0.0.1", "fe80::1"])]);

    let reply = uc
        .execute(&query_for("dual.local", RecordType::AAAA), peer())
        .unwrap();

    assert_eq!(reply.message.answers.len(), 1);
    assert_eq!(reply.message.answers[0].record_type(), RecordType::AAAA);
}

#[test]
fn test_a_query_for_ipv6_only_alias_yields_nothing() {
    let uc = use_case(&[("v6.local", &["fe80::1"])]);
    assert!(uc.execute(&query_for("v6.local", RecordType::A), peer()).is_err());
}

#[test]
fn test_any_query_returns_every_address() {
    let uc = use_case(&[("dual.local", &["10.0.0.1", "fe80::1"])]);
    let reply = uc
        .execute(&query_for("dual.local", RecordType::ANY), peer())
        .unwrap();
    assert_eq!(reply.message.answers.len(), 2);
}

#[test]
fn test_service_record_types_are_not_answered() {
    let uc = use_case(&[("myhost.local", &["192.168.1.50"])]);
    for rt in [RecordType::PTR, RecordType::SRV, RecordType::TXT] {
        assert!(uc.execute(&query_for("myhost.local", rt), peer()).is_err());
    }
}

#[test]
fn test_non_internet_class_is_ignored() {
    let uc = use_case(&[("myhost.local", &["192.168.1.50"])]);
    let mut q = Question::new("myhost.local", RecordType::A);
    q.qclass = 3;
    let query = DnsMessage::query(1, vec![q]);
    assert!(uc.execute(&query, peer()).is_err());
}

// ── multi-answer ───────────────────────────────────────────────────────────

#[test]
fn test_multiple_addresses_produce_one_record_each() {
    let uc = use_case(&[("host.local", &["10.0.0.1", "10.0.0.2"])]);

    let reply = uc
        .execute(&query_for("host.local", RecordType::A), peer())
        .unwrap();

    let addrs: Vec<IpAddr> = reply
        .message
        .answers
        .iter()
        .map(|a| a.ip_addr().unwrap())
        .collect();
    assert_eq!(
        addrs,
        vec![
            "10.0.0.1".parse::<IpAddr>().unwrap(),
            "10.0.0.2".parse::<IpAddr>().unwrap()
        ]
    );
    assert!(reply
        .message
        .answers
        .iter()
        .all(|a| &*a.name == "host.local"));
    assert_eq!(reply.message.id, 0x2a2a);
}

#[test]
fn test_questions_for_several_aliases_are_all_answered() {
    let uc = use_case(&[("a.local", &["10.0.0.1"]), ("b.local", &["10.0.0.2"])]);
    let query = DnsMessage::query(
        7,
        vec![
            Question::new("a.local", RecordType::A),
            Question::new("missing.local", RecordType::A),
            Question::new("b.local", RecordType::A),
        ],
    );

    let reply = uc.execute(&query, peer()).unwrap();
    assert_eq!(reply.message.questions.len(), 3);
    assert_eq!(reply.message.answers.len(), 2);
}

// ── destination selection ──────────────────────────────────────────────────

#[test]
fn test_plain_query_is_answered_on_the_group() {
    let uc = use_case(&[("myhost.local", &["192.168.1.50"])]);
    let reply = uc
        .execute(&query_for("myhost.local", RecordType::A), peer())
        .unwrap();
    assert_eq!(reply.destination, ReplyDestination::Multicast);
}

#[test]
fn test_unicast_bit_sends_reply_to_sender() {
    let uc = use_case(&[("myhost.local", &["192.168.1.50"])]);
    let query = DnsMessage::query(
        1,
        vec![Question::new("myhost.local", RecordType::A).with_unicast_response(true)],
    );

    let reply = uc.execute(&query, peer()).unwrap();
    assert_eq!(reply.destination, ReplyDestination::Unicast(peer()));
}

#[test]
fn test_legacy_source_port_sends_reply_to_sender() {
    let uc = use_case(&[("myhost.local", &["192.168.1.50"])]);
    let legacy: SocketAddr = "192.168.1.20:50123".parse().unwrap();

    let reply = uc
        .execute(&query_for("myhost.local", RecordType::A), legacy)
        .unwrap();
    assert_eq!(reply.destination, ReplyDestination::Unicast(legacy));
}

#[test]
fn test_configured_port_is_not_treated_as_legacy() {
    let uc = use_case(&[("myhost.local", &["192.168.1.50"])]).with_mdns_port(5454);
    let same_port: SocketAddr = "192.168.1.20:5454".parse().unwrap();
    let other_port: SocketAddr = "192.168.1.20:5353".parse().unwrap();

    let reply = uc
        .execute(&query_for("myhost.local", RecordType::A), same_port)
        .unwrap();
    assert_eq!(reply.destination, ReplyDestination::Multicast);

    let reply = uc
        .execute(&query_for("myhost.local", RecordType::A), other_port)
        .unwrap();
    assert_eq!(reply.destination, ReplyDestination::Unicast(other_port));
}

#[test]
fn test_mixed_unicast_bits_fall_back_to_multicast() {
    let uc = use_case(&[("a.local", &["10.0.0.1"]), ("b.local", &["10.0.0.2"])]);
    let query = DnsMessage::query(
        1,
        vec![
            Question::new("a.local", RecordType::A).with_unicast_response(true),
            Question::new("b.local", RecordType::A),
        ],
    );

    let reply = uc.execute(&query, peer()).unwrap();
    assert_eq!(reply.destination, ReplyDestination::Multicast);
}

#[test]
fn test_unanswered_question_does_not_affect_destination() {
    let uc = use_case(&[("a.local", &["10.0.0.1"])]);
    let query = DnsMessage::query(
        1,
        vec![
            Question::new("a.local", RecordType::A).with_unicast_response(true),
            Question::new("unknown.local", RecordType::A),
        ],
    );

    let reply = uc.execute(&query, peer()).unwrap();
    assert_eq!(reply.destination, ReplyDestination::Unicast(peer()));
}

// ── relevance filter ───────────────────────────────────────────────────────

#[test]
fn test_is_relevant_checks_any_question() {
    let uc = use_case(&[("myhost.local", &["192.168.1.50"])]);

    let relevant = DnsMessage::query(
        1,
        vec![
            Question::new("other.local", RecordType::A),
            Question::new("MYHOST.local", RecordType::PTR),
        ],
    );
    let irrelevant = query_for("other.local", RecordType::A);

    assert!(uc.is_relevant(&relevant));
    assert!(!uc.is_relevant(&irrelevant));
}

#[test]
fn test_alias_removed_after_relevance_check_yields_no_reply() {
    let repo = Arc::new(MockAliasRepository::with(&[("myhost.local", &["192.168.1.50"])]));
    let uc = AnswerQueryUseCase::new(repo.clone(), 120);
    let query = query_for("myhost.local", RecordType::A);

    assert!(uc.is_relevant(&query));
    ferrous_mdns_application::ports::AliasRepository::reload(&*repo, vec![]);
    assert!(uc.execute(&query, peer()).is_err());
}
