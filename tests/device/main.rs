mod device_id;
mod test_utils;
