//! Captured `/stats` output from an Envoy sidecar with the tcp_stats
//! transport socket enabled on the `backend` cluster.

pub const ENVOY_STATS: &str = "\
cluster.backend.assignment_stale: 0
cluster.backend.bind_errors: 0
cluster.backend.tcp_stats.cx_rx_segments: 2011
cluster.backend.tcp_stats.cx_tx_retransmitted_segments: 0
cluster.backend.tcp_stats.cx_tx_segments: 1834
cluster.backend.tcp_stats.cx_tx_unsent_bytes: 0
cluster.backend.tcp_stats.cx_tx_unacked_segments: 1
cluster.backend.upstream_cx_active: 3
cluster.backend.upstream_cx_total: 12
cluster.backend.version: 0
http.admin.downstream_rq_2xx: 7
listener.0.0.0.0_10000.downstream_cx_total: 12
server.live: 1
server.uptime: 5012
cluster.backend.tcp_stats.cx_rtt_us: P0(nan,1000) P25(nan,1025) P50(nan,1050) P75(nan,1075) P90(nan,1090) P95(nan,1095) P99(nan,1099) P99.5(nan,1099.5) P99.9(nan,1099.9) P100(nan,1100)
";
