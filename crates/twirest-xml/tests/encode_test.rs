//! Encoding back into XML

use twirest_core::models::{
    AvailablePhoneNumber, AvailablePhoneNumbersResponse, CallResponse, CallSubresourceUris,
};
use twirest_core::{ExceptionResponse, ListResponse, Page, ResponseBody};
use twirest_xml::{decode_body, encode_body};

fn full_call() -> CallResponse {
    CallResponse {
        sid: "CAa346467ca321c71dbd5e12f627deb854".to_string(),
        parent_call_sid: "CA0000000000000000000000000000parent".to_string(),
        date_created: "Thu, 19 Aug 2010 00:12:15 +0000".to_string(),
        date_updated: "Thu, 19 Aug 2010 00:12:29 +0000".to_string(),
        account_sid: "AC228b97a5fe4138be081eaff3c44180f3".to_string(),
        to: "+14155551212".to_string(),
        from: "+14158675309".to_string(),
        phone_number_sid: "PNd6b0e1e84f7b117332aed2fd2e5bbcab".to_string(),
        status: "completed".to_string(),
        start_time: "Thu, 19 Aug 2010 00:12:15 +0000".to_string(),
        end_time: "Thu, 19 Aug 2010 00:12:29 +0000".to_string(),
        duration: "14".to_string(),
        price: "-0.02000".to_string(),
        price_unit: "USD".to_string(),
        direction: "outbound-dial".to_string(),
        answered_by: "human".to_string(),
        forwarded_from: "+14155550000".to_string(),
        caller_name: "Alice & Bob".to_string(),
        uri: "/2010-04-01/Accounts/AC228b97a5fe4138be081eaff3c44180f3/Calls/CAa346467ca321c71dbd5e12f627deb854".to_string(),
        subresource_uris: Some(CallSubresourceUris {
            notifications: "/Calls/CAa346467ca321c71dbd5e12f627deb854/Notifications".to_string(),
            recordings: "/Calls/CAa346467ca321c71dbd5e12f627deb854/Recordings".to_string(),
        }),
    }
}

#[test]
fn test_call_survives_encoding() {
    let call = full_call();
    let xml = encode_body(&ResponseBody::Call(call.clone())).unwrap();
    assert!(xml.contains("Alice &amp; Bob"));

    match decode_body(&xml).unwrap() {
        ResponseBody::Call(decoded) => assert_eq!(decoded, call),
        other => panic!("unexpected body: {:?}", other.kind()),
    }
}

#[test]
fn test_capabilities_written_nested() {
    let body = ResponseBody::AvailablePhoneNumbers(AvailablePhoneNumbersResponse {
        uri: "/AvailablePhoneNumbers/US/Local".to_string(),
        numbers: vec![AvailablePhoneNumber {
            phone_number: "+15105647903".to_string(),
            voice: "true".to_string(),
            sms: "false".to_string(),
            ..Default::default()
        }],
    });
    let xml = encode_body(&body).unwrap();
    assert!(xml.contains("<Capabilities><Voice>true</Voice><SMS>false</SMS>"));

    let ResponseBody::AvailablePhoneNumbers(decoded) = decode_body(&xml).unwrap() else {
        panic!("expected available numbers");
    };
    assert_eq!(decoded.uri, "/AvailablePhoneNumbers/US/Local");
    assert!(decoded.numbers[0].voice_enabled());
    assert!(!decoded.numbers[0].sms_enabled());
}

#[test]
fn test_exception_element_name() {
    let body = ResponseBody::Exception(ExceptionResponse {
        code: 20003,
        message: "Authenticate".to_string(),
        status: "401".to_string(),
        ..Default::default()
    });
    let xml = encode_body(&body).unwrap();
    assert!(xml.starts_with("<TwilioResponse><RestException><Code>20003</Code>"));
}

#[test]
fn test_list_survives_encoding() {
    let original = decode_body(include_str!("fixtures/calls.xml")).unwrap();
    let xml = encode_body(&original).unwrap();
    let decoded = decode_body(&xml).unwrap();

    let (ResponseBody::Calls(before), ResponseBody::Calls(after)) = (&original, &decoded) else {
        panic!("expected call lists");
    };
    assert_eq!(before.page, after.page);
    assert_eq!(before.items, after.items);
}

#[test]
fn test_list_items_named_by_record() {
    let calls = ResponseBody::Calls(ListResponse::new(
        Page {
            page: 1,
            page_size: 2,
            ..Default::default()
        },
        vec![full_call(), full_call()],
    ));
    let xml = encode_body(&calls).unwrap();
    assert!(xml.starts_with("<TwilioResponse><Calls page=\"1\" numpages=\"0\" pagesize=\"2\""));
    assert_eq!(xml.matches("<Call>").count(), 2);

    let numbers = ResponseBody::AvailablePhoneNumbers(AvailablePhoneNumbersResponse {
        uri: String::new(),
        numbers: vec![AvailablePhoneNumber::default(), AvailablePhoneNumber::default()],
    });
    let xml = encode_body(&numbers).unwrap();
    assert_eq!(xml.matches("<AvailablePhoneNumber>").count(), 2);
}
