use std::io::{BufRead, Write};

use crate::{
    Error, Res,
    cli::{open_session, render},
    management::TokenStore,
    spotify::devices,
    utils,
};

const NO_DEVICES: &str = "No available devices. Open Spotify app on any of your devices!";
const MALFORMED_INPUT: &str = "Malformed input";
const ALREADY_ACTIVE: &str = "Already listening on this device";
const SWITCH_FAILED: &str = "Couldn't change the device due to an unexpected error";

/// Lets the user move playback to another device.
///
/// With a single device there is nothing to choose, so it is named directly.
/// Otherwise the indexed menu is written to `output` and one line is read from
/// `input`; nothing is sent to the remote unless that line is a valid index of
/// an inactive device.
pub async fn device<R: BufRead, W: Write>(
    store: &TokenStore,
    api_url: &str,
    input: &mut R,
    output: &mut W,
) -> Res<String> {
    let session = match open_session(store, api_url).await {
        Ok(session) => session,
        Err(e) => return render(e, |e| e.to_string()),
    };

    let available = match devices::list_devices(&session).await {
        Ok(available) => available,
        Err(Error::NoDevices) => return Ok(NO_DEVICES.to_string()),
        Err(e) => {
            return render(e, |e| {
                format!("Something bad happened while getting devices: {}", e)
            });
        }
    };

    if let [only] = available.as_slice() {
        return Ok(format!("Currently available only \"{}\"", only.name));
    }

    writeln!(output, "Available devices:")?;
    write!(output, "{}", utils::device_menu(&available))?;
    write!(output, "Select device by its id (enclosed in []): ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).is_err() {
        return Ok("Whoops! cannot read this line".to_string());
    }

    let Ok(idx) = utils::parse_device_index(&line, &available) else {
        return Ok(MALFORMED_INPUT.to_string());
    };

    let target = &available[idx];
    if target.is_active {
        return Ok(ALREADY_ACTIVE.to_string());
    }

    match devices::switch_device(&session, &target.id).await {
        Ok(()) => Ok("Successfully changed device".to_string()),
        Err(e) => render(e, |_| SWITCH_FAILED.to_string()),
    }
}
