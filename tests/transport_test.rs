//! Reading responses through the reqwest adapter, without a network

use twirest::{read_recording_audio, read_response, DecoderConfig, ResourceKind, ResponseBody};

const CALL_XML: &str = "<?xml version=\"1.0\"?>\n\
    <TwilioResponse><Call>\
    <Sid>CA42ed11f93dc08b952027ffbc406d0868</Sid>\
    <Status>queued</Status>\
    <Direction>outbound-api</Direction>\
    </Call></TwilioResponse>";

const NOT_FOUND_XML: &str = "<TwilioResponse><RestException>\
    <Code>20404</Code>\
    <Message>The requested resource was not found</Message>\
    <MoreInfo>https://www.twilio.com/docs/errors/20404</MoreInfo>\
    <Status>404</Status>\
    </RestException></TwilioResponse>";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("twirest=debug,twirest_xml=debug")
        .with_test_writer()
        .try_init();
}

fn xml_response(status: u16, body: &'static str) -> reqwest::Response {
    http::Response::builder()
        .status(status)
        .header("content-type", "application/xml")
        .body(body)
        .unwrap()
        .into()
}

#[tokio::test]
async fn test_read_call() {
    init_tracing();
    let response = read_response(xml_response(201, CALL_XML), &DecoderConfig::default())
        .await
        .unwrap();

    assert!(response.is_ok());
    assert_eq!(response.status.http, 201);
    assert_eq!(response.status.twilio, 0);
    match response.body {
        ResponseBody::Call(call) => {
            assert_eq!(call.sid, "CA42ed11f93dc08b952027ffbc406d0868");
            assert!(!call.is_finished());
        }
        other => panic!("unexpected body: {:?}", other.kind()),
    }
}

#[tokio::test]
async fn test_read_exception() {
    init_tracing();
    let response = read_response(xml_response(404, NOT_FOUND_XML), &DecoderConfig::default())
        .await
        .unwrap();

    assert!(!response.is_ok());
    assert_eq!(response.status.twilio, 20404);
    let err = response.exception().unwrap();
    assert_eq!(err.status, "Not Found");
    assert_eq!(err.status_code, 404);
}

#[tokio::test]
async fn test_read_malformed_body() {
    let err = read_response(
        xml_response(200, "<TwilioResponse><Call>"),
        &DecoderConfig::default(),
    )
    .await
    .unwrap_err();
    assert!(err.is_content_error());
}

#[tokio::test]
async fn test_recording_audio_streams_body() {
    init_tracing();
    let wav = b"RIFF\x24\x00\x00\x00WAVEfmt ".to_vec();
    let response: reqwest::Response = http::Response::builder()
        .status(200)
        .header("content-type", "audio/x-wav")
        .body(wav.clone())
        .unwrap()
        .into();

    let response = read_recording_audio(response, &DecoderConfig::default())
        .await
        .unwrap();
    assert!(response.is_ok());
    assert_eq!(response.kind(), Some(ResourceKind::RecordingAudio));

    let ResponseBody::RecordingAudio(audio) = response.body else {
        panic!("expected recording audio");
    };
    assert_eq!(audio.content_type(), Some("audio/x-wav"));
    assert_eq!(audio.read_to_end().await.unwrap(), wav);
}

#[tokio::test]
async fn test_recording_audio_error_is_decoded() {
    let response = read_recording_audio(xml_response(404, NOT_FOUND_XML), &DecoderConfig::default())
        .await
        .unwrap();

    assert!(!response.is_ok());
    assert_eq!(response.kind(), Some(ResourceKind::Exception));
    assert_eq!(response.exception().unwrap().code, 20404);
}
