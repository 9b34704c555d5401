mod telemetry_test;
