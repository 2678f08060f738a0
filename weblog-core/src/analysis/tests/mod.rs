mod content_size_tests;
