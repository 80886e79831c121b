use dyndns_domain::{DnsQuestion, RecordData, RecordType, ResponseCode};

mod helpers;
use helpers::DnsFixture;

#[tokio::test]
async fn test_answered_question_is_noerror() {
    let fx = DnsFixture::new();
    fx.hosts.add_host("www", "example.com", Some("1.2.3.4"), 300).await;

    let reply = fx
        .assembler
        .assemble(&[DnsQuestion::inet("www.example.com.", RecordType::A)])
        .await;

    assert_eq!(reply.response_code, ResponseCode::NoError);
    assert_eq!(reply.answers.len(), 1);
    assert!(reply.authority.is_empty());
}

#[tokio::test]
async fn test_name_outside_zones_is_refused() {
    let fx = DnsFixture::new();

    let reply = fx
        .assembler
        .assemble(&[DnsQuestion::inet("www.example.net.", RecordType::A)])
        .await;

    assert_eq!(reply.response_code, ResponseCode::Refused);
    assert!(reply.answers.is_empty());
    assert!(reply.authority.is_empty());
}

#[tokio::test]
async fn test_refusal_discards_earlier_answers() {
    let fx = DnsFixture::new();
    fx.hosts.add_host("www", "example.com", Some("1.2.3.4"), 300).await;

    let reply = fx
        .assembler
        .assemble(&[
            DnsQuestion::inet("www.example.com.", RecordType::A),
            DnsQuestion::inet("www.example.net.", RecordType::A),
        ])
        .await;

    assert_eq!(reply.response_code, ResponseCode::Refused);
    assert!(reply.answers.is_empty());
}

#[tokio::test]
async fn test_unknown_host_is_nxdomain_with_soa() {
    let fx = DnsFixture::new();

    let reply = fx
        .assembler
        .assemble(&[DnsQuestion::inet("missing.example.com.", RecordType::A)])
        .await;

    assert_eq!(reply.response_code, ResponseCode::NxDomain);
    assert!(reply.answers.is_empty());
    assert_eq!(reply.authority.len(), 1);
    assert_eq!(reply.authority[0].name, "example.com.");
    assert!(matches!(reply.authority[0].data, RecordData::SOA(_)));
}

#[tokio::test]
async fn test_txt_question_is_nxdomain_with_soa() {
    let fx = DnsFixture::new();
    fx.hosts.add_host("www", "example.com", Some("1.2.3.4"), 300).await;

    let reply = fx
        .assembler
        .assemble(&[DnsQuestion::inet("www.example.com.", RecordType::TXT)])
        .await;

    assert_eq!(reply.response_code, ResponseCode::NxDomain);
    assert_eq!(reply.authority.len(), 1);
}

#[tokio::test]
async fn test_store_failure_becomes_nxdomain() {
    let fx = DnsFixture::new();
    fx.hosts.set_should_fail(true);

    let reply = fx
        .assembler
        .assemble(&[DnsQuestion::inet("www.example.com.", RecordType::A)])
        .await;

    assert_eq!(reply.response_code, ResponseCode::NxDomain);
    assert_eq!(reply.authority.len(), 1);
}

#[tokio::test]
async fn test_negative_answer_stops_processing() {
    let fx = DnsFixture::new();
    fx.hosts.add_host("www", "example.com", Some("1.2.3.4"), 300).await;

    let reply = fx
        .assembler
        .assemble(&[
            DnsQuestion::inet("missing.example.com.", RecordType::A),
            DnsQuestion::inet("www.example.com.", RecordType::A),
        ])
        .await;

    assert_eq!(reply.response_code, ResponseCode::NxDomain);
    assert!(reply.answers.is_empty());
}

#[tokio::test]
async fn test_multiple_questions_accumulate_answers() {
    let fx = DnsFixture::new();
    fx.hosts.add_host("www", "example.com", Some("1.2.3.4"), 300).await;

    let reply = fx
        .assembler
        .assemble(&[
            DnsQuestion::inet("www.example.com.", RecordType::A),
            DnsQuestion::inet("example.org.", RecordType::A),
        ])
        .await;

    assert_eq!(reply.response_code, ResponseCode::NoError);
    assert_eq!(reply.answers.len(), 2);
}

#[tokio::test]
async fn test_empty_question_section_is_formerr() {
    let fx = DnsFixture::new();
    let reply = fx.assembler.assemble(&[]).await;
    assert_eq!(reply.response_code, ResponseCode::FormErr);
}
