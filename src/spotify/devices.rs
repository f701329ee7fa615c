use reqwest::Method;

use crate::{
    Error, Res,
    spotify::request::{Session, classify},
    types::{Device, DevicesResponse, TransferPlaybackRequest},
};

/// Lists the user's playback devices.
///
/// # Errors
///
/// - [`Error::Unauthorized`] when the token is rejected
/// - [`Error::NoDevices`] when the list is empty
/// - [`Error::Decode`] when the body is not a device list
pub async fn list_devices(session: &Session) -> Res<Vec<Device>> {
    let response = session.send(Method::GET, "/me/player/devices").await?;
    classify(response.status())?;

    let body = response.text().await?;
    let devices: DevicesResponse =
        serde_json::from_str(&body).map_err(|e| Error::Decode(format!("device list: {}", e)))?;

    if devices.devices.is_empty() {
        return Err(Error::NoDevices);
    }
    Ok(devices.devices)
}

/// Moves playback to `device_id` and starts playing there.
pub async fn switch_device(session: &Session, device_id: &str) -> Res<()> {
    let body = TransferPlaybackRequest {
        device_ids: vec![device_id.to_string()],
        play: true,
    };
    let response = session
        .request(Method::PUT, "/me/player", Some(&body))
        .await?;
    classify(response.status())?;
    Ok(())
}
