mod flip_frame_tests;
