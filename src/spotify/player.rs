use reqwest::{Method, StatusCode};

use crate::{
    Error, Res,
    spotify::{
        devices,
        request::{Session, classify},
    },
    types::StartPlaybackRequest,
};

/// Skips to the next track on the current device.
pub async fn next(session: &Session) -> Res<()> {
    let response = session.send(Method::POST, "/me/player/next").await?;
    classify(response.status())?;
    Ok(())
}

/// Starts playing `spotify:<context_type>:<context_id>`.
///
/// Playback is first requested on the implicit current device. If the remote
/// answers `404 Not Found` there is no addressable device, so the device list
/// is fetched and playback is retried once, explicitly on the first listed
/// device. Any other failure is returned as is; there is no further retry.
pub async fn play(session: &Session, context_type: &str, context_id: &str) -> Res<()> {
    let body = StartPlaybackRequest {
        context_uri: format!("spotify:{}:{}", context_type, context_id),
    };

    let response = session
        .request(Method::PUT, "/me/player/play", Some(&body))
        .await?;
    if response.status() != StatusCode::NOT_FOUND {
        return expect_no_content(response.status());
    }

    let target = match devices::list_devices(session).await {
        Ok(devices) => devices.into_iter().next().ok_or(Error::DeviceAccess)?,
        Err(Error::Unauthorized) => return Err(Error::Unauthorized),
        Err(_) => return Err(Error::DeviceAccess),
    };

    let response = session
        .request_with_query(
            Method::PUT,
            "/me/player/play",
            &[("device_id", target.id.as_str())],
            Some(&body),
        )
        .await?;
    expect_no_content(response.status())
}

fn expect_no_content(status: StatusCode) -> Res<()> {
    if status == StatusCode::NO_CONTENT {
        return Ok(());
    }
    match classify(status) {
        Err(e) => Err(e),
        Ok(_) => Err(Error::Status(status.as_u16())),
    }
}
