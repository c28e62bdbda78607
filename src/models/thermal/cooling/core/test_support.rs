use super::CoolingRequest;

pub(super) fn request(
    coffee_temp: f64,
    room_temp: f64,
    duration: f64,
    container: &str,
) -> CoolingRequest {
    CoolingRequest::new(coffee_temp, room_temp, duration, container)
}
