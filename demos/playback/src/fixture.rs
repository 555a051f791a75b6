//! Embedded two-route feed and deadhead table.
//!
//! Route R10 runs A–B–C–D outbound (direction 0) and back inbound
//! (direction 1).  Route R20 runs a late-evening M–N–P loop whose last trip
//! crosses midnight.  T299 has a single stop-time and is dropped on load.

pub const TRIPS_TXT: &str = "\
route_id,service_id,trip_id,direction_id\n\
R10,WEEKDAY,T101,0\n\
R10,WEEKDAY,T102,1\n\
R10,WEEKDAY,T103,0\n\
R10,WEEKDAY,T104,1\n\
R20,WEEKDAY,T201,0\n\
R20,WEEKDAY,T202,1\n\
R20,WEEKDAY,T299,0\n\
";

pub const STOP_TIMES_TXT: &str = "\
trip_id,arrival_time,departure_time,stop_id,stop_sequence\n\
T101,06:00:00,06:00:00,A,1\n\
T101,06:10:00,06:11:00,B,2\n\
T101,06:20:00,06:20:00,C,3\n\
T101,06:30:00,06:30:00,D,4\n\
T102,06:40:00,06:40:00,D,1\n\
T102,06:50:00,06:50:00,C,2\n\
T102,07:00:00,07:00:00,B,3\n\
T102,07:10:00,07:10:00,A,4\n\
T103,07:00:00,07:00:00,A,1\n\
T103,07:10:00,07:10:00,B,2\n\
T103,07:20:00,07:20:00,C,3\n\
T103,07:30:00,07:30:00,D,4\n\
T104,07:35:00,07:35:00,D,1\n\
T104,07:45:00,07:45:00,C,2\n\
T104,07:55:00,07:55:00,B,3\n\
T104,08:05:00,08:05:00,A,4\n\
T201,23:00:00,23:00:00,M,1\n\
T201,23:15:00,23:16:00,N,2\n\
T201,23:30:00,23:30:00,P,3\n\
T202,23:50:00,23:50:00,P,1\n\
T202,00:05:00,00:05:00,N,2\n\
T202,00:20:00,00:20:00,M,3\n\
T299,12:00:00,12:00:00,M,1\n\
";

pub const SEGMENTS_CSV: &str = "\
start_node_id,end_node_id,travel_time\n\
A,D,1200\n\
D,A,1200\n\
P,M,900\n\
";
