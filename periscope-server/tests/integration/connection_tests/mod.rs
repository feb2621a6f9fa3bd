mod test_host_disconnect_closes_room;
mod test_viewer_disconnect_keeps_room_open;
