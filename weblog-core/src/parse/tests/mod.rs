mod time_tests;
